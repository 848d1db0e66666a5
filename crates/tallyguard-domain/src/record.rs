//! Official election result entries, as supplied by the external store

use serde::{Deserialize, Serialize};

/// An authoritative, externally sourced election result.
///
/// Read-only to the engine; lifecycle (scraping, persistence, the
/// percentage/total consistency invariant) is owned by the external
/// data-collection collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficialRecord {
    /// Full candidate name as published
    pub candidate_name: String,

    /// Party name or acronym ("Independent" when unaffiliated)
    pub party: String,

    /// Contested position
    pub position: String,

    /// District or constituency
    pub district: String,

    /// Official vote count
    pub vote_count: u64,

    /// Official percentage of valid votes, in [0, 100]
    pub percentage: f64,

    /// Total valid votes cast for the race
    pub total_votes: u64,

    /// Whether this candidate was declared the winner of the race
    pub is_winner: bool,

    /// Publishing source name
    pub source_name: String,

    /// Publishing source URL, when known
    pub source_url: Option<String>,

    /// When the source last updated this entry (Unix seconds)
    pub last_updated: u64,
}

impl OfficialRecord {
    /// Source reference for this record, for inclusion in a verdict.
    pub fn source_reference(&self) -> SourceReference {
        SourceReference {
            name: self.source_name.clone(),
            url: self.source_url.clone(),
            last_updated: self.last_updated,
        }
    }
}

/// Citation attached to a verdict when an official record was consulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceReference {
    /// Source name (e.g. the electoral commission)
    pub name: String,

    /// Source URL, when known
    pub url: Option<String>,

    /// When the source was last updated (Unix seconds)
    pub last_updated: u64,
}
