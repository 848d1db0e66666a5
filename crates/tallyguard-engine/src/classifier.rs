//! Five-state alignment classification
//!
//! Purely rule-based: the verdict is decided by the priority ladder
//! below, and the confidence score is advisory only.

use tallyguard_domain::{Alignment, ExtractedFields, FieldOutcome, OutcomeTag};
use tracing::debug;

/// Alignment state plus advisory confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// The decided alignment state
    pub alignment: Alignment,
    /// Advisory confidence in [0, 1]
    pub confidence: f64,
}

/// Classify one verification.
///
/// Priority order:
/// 1. nothing extracted at all → `CannotVerify`, confidence 0
/// 2. no identifying field extracted (lookup was never attemptable) →
///    `CannotVerify`
/// 3. no official record found → `NoOfficialData`
/// 4. record found but nothing comparable → `CannotVerify` (degenerate)
/// 5. all comparable fields match → `Matches`; any mismatch, however
///    minor → `Conflicts` (no partial-credit state)
///
/// `DataUpdated` is never produced here; it is a caller-composed repeat
/// check built on [`AlignmentVerdict::superseded_by`].
///
/// Confidence is `matches / comparable` when a comparison happened,
/// otherwise the fraction of fields the extractor could read.
///
/// [`AlignmentVerdict::superseded_by`]: tallyguard_domain::AlignmentVerdict::superseded_by
pub fn classify(
    extracted: &ExtractedFields,
    record_found: bool,
    outcomes: &[FieldOutcome],
) -> Classification {
    let classification = classify_inner(extracted, record_found, outcomes);

    debug!(
        alignment = %classification.alignment,
        confidence = classification.confidence,
        "classified claim"
    );

    debug_assert!((0.0..=1.0).contains(&classification.confidence));
    classification
}

fn classify_inner(
    extracted: &ExtractedFields,
    record_found: bool,
    outcomes: &[FieldOutcome],
) -> Classification {
    if extracted.is_empty() {
        return Classification {
            alignment: Alignment::CannotVerify,
            confidence: 0.0,
        };
    }

    if !extracted.has_identifying_fields() {
        // Fields exist (e.g. a bare vote count) but nothing to look a
        // record up by.
        return Classification {
            alignment: Alignment::CannotVerify,
            confidence: extracted.extraction_fraction(),
        };
    }

    if !record_found {
        return Classification {
            alignment: Alignment::NoOfficialData,
            confidence: extracted.extraction_fraction(),
        };
    }

    let comparable = outcomes.iter().filter(|o| o.is_comparable()).count();
    let matches = outcomes
        .iter()
        .filter(|o| o.tag == OutcomeTag::Match)
        .count();

    if comparable == 0 {
        return Classification {
            alignment: Alignment::CannotVerify,
            confidence: extracted.extraction_fraction(),
        };
    }

    let confidence = matches as f64 / comparable as f64;
    let alignment = if matches == comparable {
        Alignment::Matches
    } else {
        Alignment::Conflicts
    };

    Classification {
        alignment,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tallyguard_domain::FieldLabel;

    fn outcome(label: FieldLabel, tag: OutcomeTag) -> FieldOutcome {
        FieldOutcome {
            label,
            claimed: "x".to_string(),
            official: "y".to_string(),
            tag,
        }
    }

    fn identified() -> ExtractedFields {
        ExtractedFields {
            candidate_name: Some("Kizza Besigye".to_string()),
            district: Some("Kampala".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_extraction_cannot_verify_with_zero_confidence() {
        let c = classify(&ExtractedFields::default(), true, &[]);
        assert_eq!(c.alignment, Alignment::CannotVerify);
        assert_eq!(c.confidence, 0.0);
    }

    #[test]
    fn test_empty_extraction_ignores_record_presence() {
        // No-field invariant: all-null extraction is CannotVerify
        // regardless of what the lookup would have said.
        for record_found in [false, true] {
            let c = classify(&ExtractedFields::default(), record_found, &[]);
            assert_eq!(c.alignment, Alignment::CannotVerify);
        }
    }

    #[test]
    fn test_no_identifying_fields_cannot_verify() {
        let extracted = ExtractedFields {
            vote_count: Some(340),
            ..Default::default()
        };
        let c = classify(&extracted, false, &[]);
        assert_eq!(c.alignment, Alignment::CannotVerify);
        assert!((c.confidence - 1.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_record_is_no_official_data() {
        let c = classify(&identified(), false, &[]);
        assert_eq!(c.alignment, Alignment::NoOfficialData);
        // two of seven fields were extractable
        assert!((c.confidence - 2.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_matches() {
        let outcomes = vec![
            outcome(FieldLabel::CandidateName, OutcomeTag::Match),
            outcome(FieldLabel::District, OutcomeTag::Match),
            outcome(FieldLabel::Percentage, OutcomeTag::Match),
            outcome(FieldLabel::Party, OutcomeTag::NotApplicable),
        ];
        let c = classify(&identified(), true, &outcomes);
        assert_eq!(c.alignment, Alignment::Matches);
        assert_eq!(c.confidence, 1.0);
    }

    #[test]
    fn test_single_mismatch_is_a_conflict() {
        let outcomes = vec![
            outcome(FieldLabel::CandidateName, OutcomeTag::Match),
            outcome(FieldLabel::District, OutcomeTag::Match),
            outcome(FieldLabel::Percentage, OutcomeTag::Mismatch),
        ];
        let c = classify(&identified(), true, &outcomes);
        assert_eq!(c.alignment, Alignment::Conflicts);
        assert!((c.confidence - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_record_but_nothing_comparable_cannot_verify() {
        let outcomes = vec![
            outcome(FieldLabel::CandidateName, OutcomeTag::NotApplicable),
            outcome(FieldLabel::Party, OutcomeTag::NotApplicable),
        ];
        let c = classify(&identified(), true, &outcomes);
        assert_eq!(c.alignment, Alignment::CannotVerify);
    }

    #[test]
    fn test_confidence_always_in_unit_interval() {
        let outcomes = vec![
            outcome(FieldLabel::CandidateName, OutcomeTag::Mismatch),
            outcome(FieldLabel::District, OutcomeTag::Mismatch),
        ];
        let c = classify(&identified(), true, &outcomes);
        assert_eq!(c.alignment, Alignment::Conflicts);
        assert_eq!(c.confidence, 0.0);
    }
}
