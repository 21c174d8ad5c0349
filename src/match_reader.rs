use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{MalformedRecord, Side, StoreError};
use crate::events::{Event, EventKind};
use crate::filter::{DateRange, MatchQuery, PageRequest};

/// A stored match document. Fields that the aggregation depends on are optional here so
/// that an incomplete document can be read and then rejected by [`Match::validate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(alias = "_id")]
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub competition: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub teams: Teams,
    #[serde(default)]
    pub score: Score,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub referees: Vec<String>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub line_up: Lineup,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    pub home: Option<String>,
    pub away: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    #[serde(default)]
    pub home: Vec<String>,
    #[serde(default)]
    pub away: Vec<String>,
}

/// A borrowed view of a match whose required fields have all been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedMatch<'a> {
    pub id: &'a str,
    pub home: &'a str,
    pub away: &'a str,
    pub home_score: u32,
    pub away_score: u32,
    pub events: Vec<CheckedEvent<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedEvent<'a> {
    pub kind: EventKind,
    pub player: Option<&'a str>,
}

impl Match {
    pub fn involves(&self, team: &str) -> bool {
        self.teams.home.as_deref() == Some(team) || self.teams.away.as_deref() == Some(team)
    }

    pub fn validate(&self) -> Result<CheckedMatch<'_>, MalformedRecord> {
        let home = required_team(&self.id, &self.teams.home, Side::Home)?;
        let away = required_team(&self.id, &self.teams.away, Side::Away)?;
        let home_score = required_score(&self.id, self.score.home, Side::Home)?;
        let away_score = required_score(&self.id, self.score.away, Side::Away)?;

        let events = self
            .events
            .iter()
            .enumerate()
            .map(|(index, event)| {
                let Some(kind) = event.kind else {
                    return Err(MalformedRecord::MissingEventCategory {
                        match_id: self.id.clone(),
                        index,
                    });
                };
                if event.team_name().is_none() {
                    return Err(MalformedRecord::MissingEventTeam {
                        match_id: self.id.clone(),
                        index,
                    });
                }
                Ok(CheckedEvent {
                    kind,
                    player: event.player_name(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CheckedMatch {
            id: &self.id,
            home,
            away,
            home_score,
            away_score,
            events,
        })
    }
}

fn required_team<'a>(
    match_id: &str,
    name: &'a Option<String>,
    side: Side,
) -> Result<&'a str, MalformedRecord> {
    match name.as_deref() {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(MalformedRecord::MissingTeam {
            match_id: match_id.to_string(),
            side,
        }),
    }
}

fn required_score(match_id: &str, goals: Option<u32>, side: Side) -> Result<u32, MalformedRecord> {
    goals.ok_or_else(|| MalformedRecord::MissingScore {
        match_id: match_id.to_string(),
        side,
    })
}

/// The storage collaborator. Every call returns an owned snapshot of the records that
/// satisfy the query.
pub trait MatchStore {
    fn find_matches(&self, range: &DateRange) -> Result<Vec<Match>, StoreError>;

    /// Returns the requested page together with the total number of matching records.
    fn find_page(
        &self,
        query: &MatchQuery,
        page: &PageRequest,
    ) -> Result<(Vec<Match>, usize), StoreError>;

    /// Stored documents that could not be accepted as matches, limited to those dated
    /// within `range`. A document without a readable date is always returned.
    fn find_refused(&self, _range: &DateRange) -> Result<Vec<MalformedRecord>, StoreError> {
        Ok(Vec::new())
    }
}

/// A stored document set aside at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefusedRecord {
    pub date: Option<DateTime<Utc>>,
    pub error: MalformedRecord,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    matches: Vec<Match>,
    ids: HashSet<String>,
    refused: Vec<RefusedRecord>,
}

impl InMemoryStore {
    /// Wraps records whose ids are already known to be unique.
    pub fn new(matches: Vec<Match>) -> Self {
        let ids = matches.iter().map(|record| record.id.clone()).collect();
        Self {
            matches,
            ids,
            refused: Vec::new(),
        }
    }

    /// Reads a JSON array of match documents. Only a file that is not a JSON array fails
    /// the load; individual documents are handled by [`InMemoryStore::from_documents`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let documents: Vec<Value> = serde_json::from_reader(BufReader::new(file))?;
        let store = Self::from_documents(documents);
        debug!("read {} match records from {}", store.len(), path.display());
        if !store.refused.is_empty() {
            warn!("set aside {} unreadable records from {}", store.refused.len(), path.display());
        }
        Ok(store)
    }

    /// Decodes each document on its own. A document that does not decode, or that repeats
    /// an id read earlier, is set aside with its reason; the others are kept.
    pub fn from_documents(documents: Vec<Value>) -> Self {
        let mut store = Self::default();
        for (index, document) in documents.into_iter().enumerate() {
            match Match::deserialize(&document) {
                Ok(record) if store.ids.contains(&record.id) => store.refused.push(RefusedRecord {
                    date: Some(record.date),
                    error: MalformedRecord::DuplicateId { match_id: record.id },
                }),
                Ok(record) => {
                    store.ids.insert(record.id.clone());
                    store.matches.push(record);
                }
                Err(err) => store.refused.push(RefusedRecord {
                    date: document
                        .get("date")
                        .and_then(|date| DateTime::<Utc>::deserialize(date).ok()),
                    error: MalformedRecord::Unreadable {
                        match_id: document_id(&document).unwrap_or_else(|| format!("#{index}")),
                        reason: err.to_string(),
                    },
                }),
            }
        }
        store
    }

    /// Adds a record, refusing documents that lack a required field or reuse a stored id.
    pub fn insert(&mut self, record: Match) -> Result<(), StoreError> {
        record.validate()?;
        if self.ids.contains(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        self.ids.insert(record.id.clone());
        self.matches.push(record);
        Ok(())
    }

    pub fn refused(&self) -> &[RefusedRecord] {
        &self.refused
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }
}

impl MatchStore for InMemoryStore {
    fn find_matches(&self, range: &DateRange) -> Result<Vec<Match>, StoreError> {
        Ok(self
            .matches
            .iter()
            .filter(|record| range.contains(&record.date))
            .cloned()
            .collect())
    }

    fn find_page(
        &self,
        query: &MatchQuery,
        page: &PageRequest,
    ) -> Result<(Vec<Match>, usize), StoreError> {
        let selected: Vec<&Match> = self
            .matches
            .iter()
            .filter(|record| query.matches(record))
            .collect();
        let total = selected.len();
        let page_items = selected
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .cloned()
            .collect();
        Ok((page_items, total))
    }

    fn find_refused(&self, range: &DateRange) -> Result<Vec<MalformedRecord>, StoreError> {
        Ok(self
            .refused
            .iter()
            .filter(|record| record.date.is_none_or(|date| range.contains(&date)))
            .map(|record| record.error.clone())
            .collect())
    }
}

fn document_id(document: &Value) -> Option<String> {
    match document.get("_id").or_else(|| document.get("id"))? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
