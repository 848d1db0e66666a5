//! Tallyguard Extractor
//!
//! Turns raw claim text into structured, nullable fields.
//!
//! # Overview
//!
//! The extractor is the first stage of the claim alignment pipeline. It
//! recognizes candidate names (via an alias lexicon and proper-noun
//! fallback patterns), party acronyms, districts, positions, vote counts,
//! percentages, and victory/defeat keywords.
//!
//! # Architecture
//!
//! ```text
//! Claim text → Extractor → ExtractedFields → Comparator/Classifier
//! ```
//!
//! Extraction is a pure function of its input: no I/O, no shared state,
//! and it never fails. A field the text does not yield is `None`, and a
//! text yielding nothing at all still produces an (all-`None`)
//! `ExtractedFields` - that is what later drives the `CannotVerify`
//! verdict.

#![warn(missing_docs)]

mod extractor;
pub mod lexicon;

pub use extractor::extract;
