use std::collections::BTreeMap;

use crate::analysis_types::{AssistRanking, PlayerStat, Rankings, ScorerRanking};

pub const TOP_N: usize = 5;

/// The `n` players with the highest `metric`, best first. Equal values are ordered by
/// player name.
pub fn top_n_by(
    players: &BTreeMap<String, PlayerStat>,
    n: usize,
    metric: impl Fn(&PlayerStat) -> u32,
) -> Vec<(&str, u32)> {
    let mut leaders: Vec<(&str, u32)> = players
        .iter()
        .map(|(name, stat)| (name.as_str(), metric(stat)))
        .collect();
    leaders.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    leaders.truncate(n);
    leaders
}

pub fn top_scorers(players: &BTreeMap<String, PlayerStat>, n: usize) -> Vec<ScorerRanking> {
    top_n_by(players, n, |stat| stat.goals)
        .into_iter()
        .map(|(name, goals)| ScorerRanking {
            name: name.to_string(),
            goals,
        })
        .collect()
}

pub fn top_assist_providers(players: &BTreeMap<String, PlayerStat>, n: usize) -> Vec<AssistRanking> {
    top_n_by(players, n, |stat| stat.assists)
        .into_iter()
        .map(|(name, assists)| AssistRanking {
            name: name.to_string(),
            assists,
        })
        .collect()
}

pub fn rank(players: &BTreeMap<String, PlayerStat>, n: usize) -> Rankings {
    Rankings {
        top_scorers: top_scorers(players, n),
        top_assist_providers: top_assist_providers(players, n),
    }
}
