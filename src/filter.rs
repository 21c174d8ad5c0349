use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::error::{Bound, InvalidFilterParameter, StoreError};
use crate::match_reader::{Match, MatchStore};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Inclusive date bounds; a missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, InvalidFilterParameter> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(InvalidFilterParameter::InvertedRange {
                    start: start.to_rfc3339(),
                    end: end.to_rfc3339(),
                });
            }
        }
        Ok(Self { start, end })
    }

    /// Builds a range from user-supplied bounds, each either RFC 3339 or `YYYY-MM-DD`.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, InvalidFilterParameter> {
        let start = start
            .map(|value| parse_date_bound(value, Bound::Start))
            .transpose()?;
        let end = end
            .map(|value| parse_date_bound(value, Bound::End))
            .transpose()?;
        Self::new(start, end)
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| *date >= start) && self.end.is_none_or(|end| *date <= end)
    }
}

/// Parses a single bound. A bare calendar date expands to the first instant of the day
/// for a start bound and the last instant of the day for an end bound.
pub fn parse_date_bound(value: &str, bound: Bound) -> Result<DateTime<Utc>, InvalidFilterParameter> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    let unparseable = || InvalidFilterParameter::UnparseableDate {
        bound,
        value: value.to_string(),
    };
    let day = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| unparseable())?;
    let time = match bound {
        Bound::Start => NaiveTime::MIN,
        Bound::End => NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).ok_or_else(unparseable)?,
    };
    Ok(day.and_time(time).and_utc())
}

/// Listing criteria: team plays home or away, location matches exactly, date in range.
/// Absent criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchQuery {
    pub team: Option<String>,
    pub location: Option<String>,
    pub dates: DateRange,
}

impl MatchQuery {
    pub fn matches(&self, record: &Match) -> bool {
        self.team.as_deref().is_none_or(|team| record.involves(team))
            && self
                .location
                .as_deref()
                .is_none_or(|location| record.location == location)
            && self.dates.contains(&record.date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Result<Self, InvalidFilterParameter> {
        if limit <= 0 {
            return Err(InvalidFilterParameter::NonPositiveLimit(limit));
        }
        if page <= 0 {
            return Err(InvalidFilterParameter::NonPositivePage(page));
        }
        Ok(Self {
            page: page as usize,
            limit: limit as usize,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE as usize,
            limit: DEFAULT_LIMIT as usize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_matches: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn new(total_matches: usize, request: &PageRequest) -> Self {
        Self {
            total_matches,
            current_page: request.page,
            total_pages: total_matches.div_ceil(request.limit),
            per_page: request.limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchPage {
    pub matches: Vec<Match>,
    pub pagination: Pagination,
}

pub fn list_matches(
    store: &impl MatchStore,
    query: &MatchQuery,
    request: &PageRequest,
) -> Result<MatchPage, StoreError> {
    let (matches, total) = store.find_page(query, request)?;
    Ok(MatchPage {
        matches,
        pagination: Pagination::new(total, request),
    })
}
