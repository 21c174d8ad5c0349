//! Normalization of third-party match feeds (football-data.org style dumps) into stored
//! match records.

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::events::{Event, EventKind};
use crate::match_reader::{Lineup, Match, Score, Teams};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("could not read feed: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse feed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no match data found in feed")]
    Empty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feed {
    #[serde(default)]
    pub matches: Vec<FeedMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FeedId {
    Number(u64),
    Text(String),
}

impl Display for FeedId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedId::Number(id) => write!(f, "{id}"),
            FeedId::Text(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMatch {
    pub id: FeedId,
    pub utc_date: DateTime<Utc>,
    #[serde(default)]
    pub competition: Option<Named>,
    #[serde(default)]
    pub season: Option<FeedSeason>,
    #[serde(default)]
    pub home_team: Option<Named>,
    #[serde(default)]
    pub away_team: Option<Named>,
    #[serde(default)]
    pub score: Option<FeedScore>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub referees: Vec<Named>,
    #[serde(default)]
    pub scorers: Vec<FeedScorer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSeason {
    #[serde(default)]
    pub start_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedScore {
    #[serde(default)]
    pub full_time: Option<FeedGoals>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FeedGoals {
    #[serde(default, alias = "homeTeam")]
    pub home: Option<u32>,
    #[serde(default, alias = "awayTeam")]
    pub away: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedScorer {
    #[serde(default)]
    pub player: Named,
    #[serde(default)]
    pub team: Named,
    #[serde(default)]
    pub minute: Option<u32>,
}

impl From<FeedMatch> for Match {
    fn from(external: FeedMatch) -> Self {
        let full_time = external.score.and_then(|score| score.full_time);
        let events = external
            .scorers
            .into_iter()
            .map(|scorer| Event {
                kind: Some(EventKind::Goal),
                player: scorer.player.name,
                team: scorer.team.name,
                minute: scorer.minute,
            })
            .collect();

        Match {
            id: external.id.to_string(),
            date: external.utc_date,
            competition: external.competition.and_then(|c| c.name).unwrap_or_default(),
            season: external.season.and_then(|s| s.start_date).unwrap_or_default(),
            teams: Teams {
                home: external.home_team.and_then(|team| team.name),
                away: external.away_team.and_then(|team| team.name),
            },
            score: Score {
                home: full_time.and_then(|goals| goals.home),
                away: full_time.and_then(|goals| goals.away),
            },
            location: external.venue.unwrap_or_default(),
            referees: external.referees.into_iter().filter_map(|referee| referee.name).collect(),
            events,
            line_up: Lineup::default(),
        }
    }
}

pub fn parse_feed(json: &str) -> Result<Vec<Match>, FeedError> {
    normalize(serde_json::from_str(json)?)
}

pub fn read_feed(path: impl AsRef<Path>) -> Result<Vec<Match>, FeedError> {
    let file = File::open(path)?;
    normalize(serde_json::from_reader(BufReader::new(file))?)
}

fn normalize(feed: Feed) -> Result<Vec<Match>, FeedError> {
    if feed.matches.is_empty() {
        return Err(FeedError::Empty);
    }
    debug!("normalizing {} feed matches", feed.matches.len());
    Ok(feed.matches.into_iter().map(Match::from).collect())
}
