use clap::Parser;
use tracing::{debug, info};

use match_stats::config::{init_tracing, StatsArgs};
use match_stats::match_reader::InMemoryStore;
use match_stats::report::write_report;
use match_stats::stat_collection::compute_stats_between;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = StatsArgs::parse();
    debug!("args: {args:?}");

    let store = InMemoryStore::from_json_file(&args.file)?;
    info!("loaded {} matches from {}", store.len(), args.file.display());

    let report = compute_stats_between(&store, args.start_date.as_deref(), args.end_date.as_deref())?;
    write_report(args.output.as_deref(), &report, args.format)?;
    Ok(())
}
