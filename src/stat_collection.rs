use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

use tracing::{debug, info, warn};

use crate::analysis_types::{PlayerStat, RejectedMatch, StatsReport, TeamStat};
use crate::error::StatsError;
use crate::event_processor::process_match;
use crate::filter::DateRange;
use crate::match_reader::{Match, MatchStore};
use crate::records;

/// Name-keyed running totals. Entries spring into existence, zeroed, the first time they
/// are asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulator<V> {
    entries: BTreeMap<String, V>,
}

impl<V> Default for Accumulator<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<V: Default> Accumulator<V> {
    pub fn get_or_init(&mut self, key: &str) -> &mut V {
        self.entries.entry(key.to_string()).or_default()
    }
}

impl<V> Accumulator<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, V> {
        self.entries.iter()
    }

    pub fn into_map(self) -> BTreeMap<String, V> {
        self.entries
    }
}

/// Runs the accumulation and ranking stages over an already-filtered batch.
///
/// Every match is validated before it touches any counter. A malformed match is left out
/// entirely and listed under [`StatsReport::rejected`]; the remainder of the batch is
/// aggregated as normal.
pub fn aggregate(matches: &[Match]) -> StatsReport {
    let mut teams: Accumulator<TeamStat> = Accumulator::default();
    let mut players: Accumulator<PlayerStat> = Accumulator::default();
    let mut player_of_the_match = BTreeMap::new();
    let mut rejected = Vec::new();

    for record in matches {
        let fixture = match record.validate() {
            Ok(fixture) => fixture,
            Err(err) => {
                warn!("rejecting record: {err}");
                rejected.push(RejectedMatch::from(&err));
                continue;
            }
        };

        if let Some(mvp) = process_match(&fixture, &mut teams, &mut players) {
            debug!("player of the match {}: {mvp}", fixture.id);
            player_of_the_match.insert(fixture.id.to_string(), mvp.to_string());
        }
    }

    let players = players.into_map();
    let rankings = records::rank(&players, records::TOP_N);
    StatsReport {
        teams: teams.into_map(),
        players,
        player_of_the_match,
        rankings,
        rejected,
    }
}

/// Aggregates the stored matches dated within `range`. Documents the store could not
/// accept are reported under [`StatsReport::rejected`] alongside the malformed matches.
pub fn compute_stats(store: &impl MatchStore, range: &DateRange) -> Result<StatsReport, StatsError> {
    let matches = store.find_matches(range)?;
    let refused = store.find_refused(range)?;
    let mut report = aggregate(&matches);
    info!(
        "aggregated {} of {} matches: {} teams, {} players",
        matches.len() - report.rejected.len(),
        matches.len(),
        report.teams.len(),
        report.players.len()
    );
    for err in &refused {
        warn!("rejecting record: {err}");
        report.rejected.push(RejectedMatch::from(err));
    }
    Ok(report)
}

/// Same as [`compute_stats`], with the bounds given as user-supplied date strings. Bad
/// bounds are refused before any match is fetched.
pub fn compute_stats_between(
    store: &impl MatchStore,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<StatsReport, StatsError> {
    let range = DateRange::parse(start, end)?;
    compute_stats(store, &range)
}
