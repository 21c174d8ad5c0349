use std::io;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::error::InvalidFilterParameter;
use crate::filter::{DateRange, MatchQuery, PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::report::OutputFormat;

const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the fmt subscriber on stderr, honouring `RUST_LOG` when it is set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Aggregate statistics over the stored matches.
#[derive(Debug, Clone, clap::Parser)]
pub struct StatsArgs {
    /// JSON file holding the stored match records
    #[clap(short = 'f', long)]
    pub file: PathBuf,

    /// earliest match date to include (RFC 3339 or YYYY-MM-DD)
    #[clap(long = "start-date")]
    pub start_date: Option<String>,

    /// latest match date to include (RFC 3339 or YYYY-MM-DD)
    #[clap(long = "end-date")]
    pub end_date: Option<String>,

    /// output format
    #[clap(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// write the report here instead of stdout
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// List stored matches a page at a time.
#[derive(Debug, Clone, clap::Parser)]
pub struct ListArgs {
    /// JSON file holding the stored match records
    #[clap(short = 'f', long)]
    pub file: PathBuf,

    /// only matches this team played, home or away
    #[clap(long)]
    pub team: Option<String>,

    /// only matches played at this location
    #[clap(long)]
    pub location: Option<String>,

    /// earliest match date to include
    #[clap(long = "start-date")]
    pub start_date: Option<String>,

    /// latest match date to include
    #[clap(long = "end-date")]
    pub end_date: Option<String>,

    /// page number, starting at 1
    #[clap(long, default_value_t = DEFAULT_PAGE, allow_negative_numbers = true)]
    pub page: i64,

    /// matches per page
    #[clap(long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,
}

impl ListArgs {
    pub fn query(&self) -> Result<(MatchQuery, PageRequest), InvalidFilterParameter> {
        let request = PageRequest::new(self.page, self.limit)?;
        let dates = DateRange::parse(self.start_date.as_deref(), self.end_date.as_deref())?;
        let query = MatchQuery {
            team: self.team.clone(),
            location: self.location.clone(),
            dates,
        };
        Ok((query, request))
    }
}

/// Normalize a third-party feed dump into stored match records.
#[derive(Debug, Clone, clap::Parser)]
pub struct ImportArgs {
    /// feed dump to read
    #[clap(short = 'f', long)]
    pub file: PathBuf,

    /// where to write the match records; stdout if omitted
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// append to the records already in the output file
    #[clap(long)]
    pub append: bool,
}
