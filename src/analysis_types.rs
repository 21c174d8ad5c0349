use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::MalformedRecord;
use crate::events::EventKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStat {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub clean_sheets: u32,
}

impl TeamStat {
    /// Folds one fixture into the record, seen from this team's side.
    pub fn record_result(&mut self, scored: u32, conceded: u32) {
        self.goals_for += scored;
        self.goals_against += conceded;
        match scored.cmp(&conceded) {
            Ordering::Greater => self.wins += 1,
            Ordering::Less => self.losses += 1,
            Ordering::Equal => self.draws += 1,
        }
        if conceded == 0 {
            self.clean_sheets += 1;
        }
    }

    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub goals: u32,
    pub assists: u32,
    pub penalties: u32,
    pub warnings: u32,
    pub saved_penalties: u32,
    pub mvp_count: u32,
}

impl PlayerStat {
    /// Bumps the counter dedicated to `kind`. Avoided warnings only feed the match score
    /// and have no counter of their own.
    pub fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::Goal => self.goals += 1,
            EventKind::Assist => self.assists += 1,
            EventKind::Penalty => self.penalties += 1,
            EventKind::Warning => self.warnings += 1,
            EventKind::PenaltySaved => self.saved_penalties += 1,
            EventKind::WarningAvoided => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorerRanking {
    pub name: String,
    pub goals: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistRanking {
    pub name: String,
    pub assists: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rankings {
    pub top_scorers: Vec<ScorerRanking>,
    pub top_assist_providers: Vec<AssistRanking>,
}

/// A match left out of the aggregation, with the reason it was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedMatch {
    pub match_id: String,
    pub reason: String,
}

impl From<&MalformedRecord> for RejectedMatch {
    fn from(err: &MalformedRecord) -> Self {
        Self {
            match_id: err.match_id().to_string(),
            reason: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub teams: BTreeMap<String, TeamStat>,
    pub players: BTreeMap<String, PlayerStat>,
    pub player_of_the_match: BTreeMap<String, String>,
    pub rankings: Rankings,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedMatch>,
}
