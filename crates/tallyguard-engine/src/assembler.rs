//! Verdict assembly
//!
//! Pure packaging: the only effect is reading the clock for the
//! `verified_at` stamp.

use std::time::{SystemTime, UNIX_EPOCH};
use tallyguard_domain::{
    Alignment, AlignmentVerdict, ExtractedFields, FieldOutcome, OfficialRecord, VerdictId,
};

/// Build the final verdict from the pipeline's intermediate products.
///
/// The source reference is copied from the official record when one was
/// consulted; `ocr_text` is present only on the image path.
pub fn assemble(
    alignment: Alignment,
    extracted_fields: ExtractedFields,
    official_record: Option<OfficialRecord>,
    field_outcomes: Vec<FieldOutcome>,
    confidence: f64,
    explanation: String,
    ocr_text: Option<String>,
) -> AlignmentVerdict {
    let source_reference = official_record.as_ref().map(|r| r.source_reference());

    AlignmentVerdict {
        id: VerdictId::new(),
        alignment,
        extracted_fields,
        official_record,
        field_outcomes,
        confidence,
        explanation,
        source_reference,
        ocr_text,
        verified_at: unix_now(),
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
