//! In-memory snapshot lookup with progressive filter relaxation

use tallyguard_domain::traits::{LookupQuery, RecordLookup};
use tallyguard_domain::OfficialRecord;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during record lookup
#[derive(Error, Debug)]
pub enum LookupError {
    /// The record store could not be reached
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Filter predicate over official records.
type Filter<'a> = Box<dyn Fn(&OfficialRecord) -> bool + 'a>;

/// Deterministic lookup over a fixed snapshot of official records.
///
/// Matching is case-insensitive containment on the identifying fields,
/// with the candidate matched by their last name token (claims rarely
/// spell the full official name). When the full filter set finds
/// nothing, filters are relaxed progressively: all filters, then the
/// first two, then the first alone. An empty query always resolves to
/// `None` rather than guessing.
///
/// For a fixed snapshot the result is a pure function of the query: the
/// first record in snapshot order that satisfies the filters wins.
pub struct SnapshotLookup {
    records: Vec<OfficialRecord>,
}

impl SnapshotLookup {
    /// Create a lookup over the given records.
    pub fn new(records: Vec<OfficialRecord>) -> Self {
        Self { records }
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn build_filters<'a>(&self, query: &'a LookupQuery) -> Vec<Filter<'a>> {
        let mut filters: Vec<Filter<'a>> = Vec::new();

        if let Some(name) = &query.candidate_name {
            // Match on the last name token: claims rarely carry the
            // full official spelling.
            let needle = name
                .split_whitespace()
                .last()
                .unwrap_or(name)
                .to_lowercase();
            filters.push(Box::new(move |r| {
                r.candidate_name.to_lowercase().contains(&needle)
            }));
        }

        if let Some(district) = &query.district {
            let needle = district.to_lowercase();
            filters.push(Box::new(move |r| {
                r.district.to_lowercase().contains(&needle)
            }));
        }

        if let Some(position) = &query.position {
            if position == "MP" || position == "Member of Parliament" {
                // MP variants normalize to either spelling.
                filters.push(Box::new(|r| {
                    let p = r.position.to_lowercase();
                    p.contains("member of parliament") || p.contains("mp")
                }));
            } else {
                let needle = position.to_lowercase();
                filters.push(Box::new(move |r| {
                    r.position.to_lowercase().contains(&needle)
                }));
            }
        }

        if let Some(party) = &query.party {
            let needle = party.to_lowercase();
            filters.push(Box::new(move |r| r.party.to_lowercase().contains(&needle)));
        }

        filters
    }

    fn first_matching(&self, filters: &[Filter<'_>]) -> Option<&OfficialRecord> {
        self.records
            .iter()
            .find(|r| filters.iter().all(|f| f(r)))
    }
}

impl RecordLookup for SnapshotLookup {
    type Error = LookupError;

    fn lookup(&self, query: &LookupQuery) -> Result<Option<OfficialRecord>, Self::Error> {
        if query.is_empty() {
            return Ok(None);
        }

        let filters = self.build_filters(query);

        if let Some(record) = self.first_matching(&filters) {
            return Ok(Some(record.clone()));
        }

        // Progressive relaxation: drop the trailing filters, keep the
        // strongest identifying ones.
        if filters.len() > 2 {
            if let Some(record) = self.first_matching(&filters[..2]) {
                debug!("record found after relaxing to two filters");
                return Ok(Some(record.clone()));
            }
        }
        if filters.len() > 1 {
            if let Some(record) = self.first_matching(&filters[..1]) {
                debug!("record found after relaxing to one filter");
                return Ok(Some(record.clone()));
            }
        }

        Ok(None)
    }
}

/// A lookup that is always unavailable, simulating a transient store
/// outage. The engine must surface this as an error, never as a
/// "no official data" verdict.
#[derive(Debug, Clone, Default)]
pub struct UnavailableLookup;

impl RecordLookup for UnavailableLookup {
    type Error = LookupError;

    fn lookup(&self, _query: &LookupQuery) -> Result<Option<OfficialRecord>, Self::Error> {
        Err(LookupError::Unavailable("store offline".to_string()))
    }
}
