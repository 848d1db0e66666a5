//! Tallyguard Domain Layer
//!
//! Core value types and trait interfaces for the claim alignment engine.
//! This crate stays dependency-light (uuid + serde only) and defines the
//! concepts every other layer depends upon.
//!
//! ## Key Concepts
//!
//! - **ExtractedFields**: what the extractor could read out of a claim
//! - **OfficialRecord**: an authoritative election result entry
//! - **FieldOutcome**: per-field match/mismatch/not-applicable result
//! - **Alignment**: the five-state classification of claim vs. record
//! - **AlignmentVerdict**: the full response package for one verification
//!
//! ## Architecture
//!
//! - Pure data and comparison primitives only, no I/O
//! - Trait definitions for the two external collaborators (OCR, lookup);
//!   implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fields;
pub mod outcome;
pub mod record;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use fields::ExtractedFields;
pub use outcome::{FieldLabel, FieldOutcome, OutcomeTag};
pub use record::{OfficialRecord, SourceReference};
pub use verdict::{Alignment, AlignmentVerdict, VerdictId};
