//! Fields recovered from unstructured claim text

use serde::{Deserialize, Serialize};

/// Number of fields the extractor can populate.
///
/// Used to express "how much of the claim could we read" as a fraction
/// when no comparison against an official record is possible.
pub const EXTRACTABLE_FIELD_COUNT: usize = 7;

/// Structured fields extracted from a claim, each nullable.
///
/// Produced once per verification request and immutable afterwards.
/// Absence of a field is ordinary (claims are partial by nature) and is
/// never treated as an extraction error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Canonical candidate name, if one was recognized
    pub candidate_name: Option<String>,

    /// Party acronym from the party lexicon
    pub party: Option<String>,

    /// Contested position (e.g. "President", "Member of Parliament")
    pub position: Option<String>,

    /// District or constituency name
    pub district: Option<String>,

    /// Claimed vote count, thousand separators already stripped
    pub vote_count: Option<u64>,

    /// Claimed percentage, guaranteed in [0, 100]
    pub percentage: Option<f64>,

    /// Victory/defeat keyword ("won", "lost", "leading", ...), used for
    /// explanation text and winner cross-checks, never for field matching
    pub result_claim: Option<String>,
}

impl ExtractedFields {
    /// Count of non-null fields.
    pub fn populated_count(&self) -> usize {
        let mut n = 0;
        if self.candidate_name.is_some() {
            n += 1;
        }
        if self.party.is_some() {
            n += 1;
        }
        if self.position.is_some() {
            n += 1;
        }
        if self.district.is_some() {
            n += 1;
        }
        if self.vote_count.is_some() {
            n += 1;
        }
        if self.percentage.is_some() {
            n += 1;
        }
        if self.result_claim.is_some() {
            n += 1;
        }
        n
    }

    /// True when extraction found nothing at all.
    pub fn is_empty(&self) -> bool {
        self.populated_count() == 0
    }

    /// True when at least one identifying field (candidate, district,
    /// position) is present, i.e. a record lookup is worth attempting.
    pub fn has_identifying_fields(&self) -> bool {
        self.candidate_name.is_some() || self.district.is_some() || self.position.is_some()
    }

    /// Fraction of the extractable fields that were populated, in [0, 1].
    pub fn extraction_fraction(&self) -> f64 {
        self.populated_count() as f64 / EXTRACTABLE_FIELD_COUNT as f64
    }

    /// Labels of the identifying fields that are missing, for use in
    /// "not enough to verify" explanations.
    pub fn missing_identifying_labels(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.candidate_name.is_none() {
            missing.push("candidate name");
        }
        if self.district.is_none() {
            missing.push("district");
        }
        if self.position.is_none() {
            missing.push("position");
        }
        missing
    }
}
