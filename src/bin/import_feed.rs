use anyhow::bail;
use clap::Parser;
use tracing::{debug, info, warn};

use match_stats::config::{init_tracing, ImportArgs};
use match_stats::feed::read_feed;
use match_stats::match_reader::InMemoryStore;
use match_stats::report::write_json;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = ImportArgs::parse();
    debug!("args: {args:?}");
    if args.append && args.output.is_none() {
        bail!("--append requires an output file (-o)");
    }

    let mut store = match &args.output {
        Some(path) if args.append && path.exists() => {
            let store = InMemoryStore::from_json_file(path)?;
            if !store.refused().is_empty() {
                bail!(
                    "{} holds {} unreadable records; refusing to rewrite it",
                    path.display(),
                    store.refused().len()
                );
            }
            store
        }
        _ => InMemoryStore::default(),
    };
    let existing = store.len();

    let imported = read_feed(&args.file)?;
    let fetched = imported.len();
    for record in imported {
        if let Err(err) = store.insert(record) {
            warn!("skipping feed match: {err}");
        }
    }
    info!(
        "imported {} of {fetched} feed matches",
        store.len() - existing
    );

    write_json(args.output.as_deref(), &store.matches())?;
    Ok(())
}
