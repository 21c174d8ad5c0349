use clap::Parser;
use tracing::{debug, info};

use match_stats::config::{init_tracing, ListArgs};
use match_stats::filter::list_matches;
use match_stats::match_reader::InMemoryStore;
use match_stats::report::write_json;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = ListArgs::parse();
    debug!("args: {args:?}");
    let (query, request) = args.query()?;

    let store = InMemoryStore::from_json_file(&args.file)?;
    let page = list_matches(&store, &query, &request)?;
    info!(
        "page {} of {} ({} matching records)",
        page.pagination.current_page, page.pagination.total_pages, page.pagination.total_matches
    );
    write_json(None, &page)?;
    Ok(())
}
