use std::fmt::{Display, Formatter};
use std::io;

use thiserror::Error;

/// Which side of a fixture a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// Which end of a date range a bound was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl Display for Bound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Start => write!(f, "start"),
            Bound::End => write!(f, "end"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFilterParameter {
    #[error("unparseable {bound} date '{value}'")]
    UnparseableDate { bound: Bound, value: String },

    #[error("start date {start} is after end date {end}")]
    InvertedRange { start: String, end: String },

    #[error("page must be positive, got {0}")]
    NonPositivePage(i64),

    #[error("limit must be positive, got {0}")]
    NonPositiveLimit(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    #[error("match {match_id}: missing {side} team name")]
    MissingTeam { match_id: String, side: Side },

    #[error("match {match_id}: missing {side} score")]
    MissingScore { match_id: String, side: Side },

    #[error("match {match_id}: event #{index} has no category")]
    MissingEventCategory { match_id: String, index: usize },

    #[error("match {match_id}: event #{index} has no team name")]
    MissingEventTeam { match_id: String, index: usize },

    #[error("match {match_id}: unreadable document ({reason})")]
    Unreadable { match_id: String, reason: String },

    #[error("match {match_id}: duplicate id")]
    DuplicateId { match_id: String },
}

impl MalformedRecord {
    pub fn match_id(&self) -> &str {
        match self {
            MalformedRecord::MissingTeam { match_id, .. }
            | MalformedRecord::MissingScore { match_id, .. }
            | MalformedRecord::MissingEventCategory { match_id, .. }
            | MalformedRecord::MissingEventTeam { match_id, .. }
            | MalformedRecord::Unreadable { match_id, .. }
            | MalformedRecord::DuplicateId { match_id } => match_id,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read match records: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse match records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("refused malformed record: {0}")]
    Malformed(#[from] MalformedRecord),

    #[error("match {0} is already stored")]
    DuplicateId(String),
}

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("{0}")]
    InvalidFilter(#[from] InvalidFilterParameter),

    #[error("{0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_messages() {
        let err = MalformedRecord::MissingScore {
            match_id: "m1".into(),
            side: Side::Away,
        };
        assert_eq!("match m1: missing away score", err.to_string());
        assert_eq!("m1", err.match_id());

        let err = MalformedRecord::MissingEventCategory {
            match_id: "m2".into(),
            index: 3,
        };
        assert_eq!("match m2: event #3 has no category", err.to_string());

        let err = MalformedRecord::Unreadable {
            match_id: "#4".into(),
            reason: "unknown variant `foul`".into(),
        };
        assert_eq!("match #4: unreadable document (unknown variant `foul`)", err.to_string());
        assert_eq!("#4", err.match_id());
    }

    #[test]
    fn filter_errors_lift_into_stats_error() {
        let err: StatsError = InvalidFilterParameter::NonPositiveLimit(0).into();
        assert_eq!("limit must be positive, got 0", err.to_string());
    }
}
