//! Football match statistics: team records, player totals, player of the match and
//! leaderboards, all derived on demand from a batch of stored match records.

pub mod analysis_types;
pub mod config;
pub mod error;
pub mod event_processor;
pub mod events;
pub mod feed;
pub mod filter;
pub mod match_reader;
pub mod records;
pub mod report;
pub mod stat_collection;

#[cfg(test)]
pub(crate) mod testing;
