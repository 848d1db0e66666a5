//! Tallyguard Lookup
//!
//! `RecordLookup` implementations over an in-memory snapshot of official
//! results.
//!
//! The external collaborator that owns official data (scraping,
//! persistence) is out of the engine's scope; this crate provides the
//! deterministic stand-in the engine and its tests run against:
//! containment matching over identifying fields with progressive filter
//! relaxation, the way the production store queries behave.

#![warn(missing_docs)]

mod snapshot;

pub use snapshot::{LookupError, SnapshotLookup, UnavailableLookup};
