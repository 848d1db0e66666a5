//! Tallyguard Engine
//!
//! Deterministic claim alignment: compares fields extracted from an
//! election claim against an official record and produces one of five
//! explainable verdicts.
//!
//! # Architecture
//!
//! ```text
//! Claim text ─┐
//!             ├→ Extractor → Lookup → Comparator → Classifier → Verdict
//! Image → OCR ┘
//! ```
//!
//! # Key Properties
//!
//! - **Deterministic**: identical input and record snapshot always yield
//!   the same verdict (excluding id and timestamp)
//! - **Rule-based**: field tolerances and the five-state classification
//!   are fixed rules, never probabilistic scores
//! - **Stateless**: every request is an independent pure computation; the
//!   engine performs no I/O beyond the two injected collaborators and
//!   retains nothing after the call returns
//! - **Explainable**: every verdict carries per-field outcomes and a
//!   templated human-readable explanation
//!
//! # Example Usage
//!
//! ```no_run
//! use tallyguard_engine::{EngineConfig, VerificationEngine};
//! use tallyguard_lookup::SnapshotLookup;
//! use tallyguard_ocr::MockOcr;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let lookup = SnapshotLookup::new(Vec::new());
//! let ocr = MockOcr::new("Museveni won with 58%");
//! let engine = VerificationEngine::new(lookup, ocr, EngineConfig::default());
//!
//! let verdict = engine.verify_text("Museveni won Kampala with 65% of the vote")?;
//! println!("{}: {}", verdict.alignment, verdict.explanation);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod assembler;
mod classifier;
mod comparator;
mod config;
mod engine;
mod error;
mod explanation;
mod fingerprint;


pub use classifier::{classify, Classification};
pub use comparator::compare;
pub use config::EngineConfig;
pub use engine::VerificationEngine;
pub use error::EngineError;
pub use fingerprint::claim_fingerprint;
