//! The verification engine facade

use crate::assembler;
use crate::classifier;
use crate::comparator;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::explanation;
use std::fmt;
use tallyguard_domain::traits::{LookupQuery, OcrAdapter, RecordLookup};
use tallyguard_domain::AlignmentVerdict;
use tracing::{debug, info, warn};

/// The engine runs the full alignment pipeline for one claim:
/// extraction, official record lookup, field comparison, classification,
/// and verdict assembly.
///
/// Both collaborators are injected as narrow capability traits, so tests
/// run against deterministic stand-ins with no network or image
/// processing. The engine holds no mutable state; one instance can serve
/// arbitrary requests from arbitrary threads.
pub struct VerificationEngine<L, O>
where
    L: RecordLookup,
    O: OcrAdapter,
{
    lookup: L,
    ocr: O,
    config: EngineConfig,
}

impl<L, O> VerificationEngine<L, O>
where
    L: RecordLookup,
    O: OcrAdapter,
    L::Error: fmt::Display,
    O::Error: fmt::Display,
{
    /// Create a new engine over the given collaborators.
    pub fn new(lookup: L, ocr: O, config: EngineConfig) -> Self {
        Self {
            lookup,
            ocr,
            config,
        }
    }

    /// Verify a text claim.
    ///
    /// Never fails on claim content: empty or unintelligible text yields
    /// a `CannotVerify` verdict. The only error is an unavailable lookup.
    pub fn verify_text(&self, claim_text: &str) -> Result<AlignmentVerdict, EngineError> {
        self.run(claim_text, None)
    }

    /// Verify an image claim: OCR first, then the identical text
    /// pipeline. The verdict carries the raw OCR text for transparency.
    ///
    /// The caller has already validated image size and mime type; OCR
    /// failure (or an image yielding no text) is an infrastructure
    /// error, not a `CannotVerify` verdict.
    pub fn verify_image(
        &self,
        image_bytes: &[u8],
        mime_type: &str,
    ) -> Result<AlignmentVerdict, EngineError> {
        let text = self
            .ocr
            .recognize(image_bytes, mime_type)
            .map_err(|e| EngineError::Ocr(e.to_string()))?;

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(EngineError::OcrNoText);
        }

        debug!(chars = text.len(), "OCR recovered text from image");
        self.run(&text, Some(text.clone()))
    }

    fn run(
        &self,
        claim_text: &str,
        ocr_text: Option<String>,
    ) -> Result<AlignmentVerdict, EngineError> {
        if claim_text.len() > self.config.advisory_max_claim_length {
            // Over-length input is processed as ordinary text; bounding
            // is the caller's contract.
            warn!(
                chars = claim_text.len(),
                advisory_max = self.config.advisory_max_claim_length,
                "claim text exceeds advisory length"
            );
        }

        let extracted = tallyguard_extractor::extract(claim_text);

        // A lookup with no identifying field would only guess; skip it.
        let official = if extracted.has_identifying_fields() {
            let query = LookupQuery {
                candidate_name: extracted.candidate_name.clone(),
                district: extracted.district.clone(),
                position: extracted.position.clone(),
                party: extracted.party.clone(),
            };
            self.lookup
                .lookup(&query)
                .map_err(|e| EngineError::LookupUnavailable(e.to_string()))?
        } else {
            None
        };

        let outcomes = comparator::compare(&extracted, official.as_ref(), &self.config);
        let classification = classifier::classify(&extracted, official.is_some(), &outcomes);
        let explanation =
            explanation::generate(classification.alignment, &extracted, official.as_ref(), &outcomes);

        info!(
            alignment = %classification.alignment,
            confidence = classification.confidence,
            record_found = official.is_some(),
            "claim verified"
        );

        Ok(assembler::assemble(
            classification.alignment,
            extracted,
            official,
            outcomes,
            classification.confidence,
            explanation,
            ocr_text,
        ))
    }
}
