//! Per-field comparison rules
//!
//! Each comparable field has one rule. Outcomes are produced in a fixed
//! order (candidate, party, district, vote count, percentage, then
//! position when claimed) so explanations and UI rows are stable across
//! runs on identical input.

use crate::config::EngineConfig;
use tallyguard_domain::{ExtractedFields, FieldLabel, FieldOutcome, OfficialRecord, OutcomeTag};

/// Display placeholder for an absent value.
const ABSENT: &str = "—";

/// Compare extracted fields against an official record.
///
/// A claim-side `None` yields `NotApplicable` regardless of the official
/// value: absence is never a mismatch. With no record at all, every
/// outcome is `NotApplicable`.
pub fn compare(
    extracted: &ExtractedFields,
    official: Option<&OfficialRecord>,
    config: &EngineConfig,
) -> Vec<FieldOutcome> {
    let mut outcomes = Vec::with_capacity(6);

    outcomes.push(string_outcome(
        FieldLabel::CandidateName,
        extracted.candidate_name.as_deref(),
        official.map(|r| r.candidate_name.as_str()),
        contains_either_way,
    ));

    outcomes.push(string_outcome(
        FieldLabel::Party,
        extracted.party.as_deref(),
        official.map(|r| r.party.as_str()),
        exact_ignore_case,
    ));

    outcomes.push(string_outcome(
        FieldLabel::District,
        extracted.district.as_deref(),
        official.map(|r| r.district.as_str()),
        contains_either_way,
    ));

    outcomes.push(vote_count_outcome(
        extracted.vote_count,
        official.map(|r| r.vote_count),
        config.vote_count_tolerance,
    ));

    outcomes.push(percentage_outcome(
        extracted.percentage,
        official.map(|r| r.percentage),
        config.percentage_tolerance,
    ));

    // Position is not always claimed; only emit the row when it is.
    if extracted.position.is_some() {
        outcomes.push(string_outcome(
            FieldLabel::Position,
            extracted.position.as_deref(),
            official.map(|r| r.position.as_str()),
            exact_ignore_case,
        ));
    }

    outcomes
}

/// Case-insensitive containment in either direction, tolerating partial
/// names, titles, and abbreviations.
fn contains_either_way(claimed: &str, official: &str) -> bool {
    let claimed = claimed.to_lowercase();
    let official = official.to_lowercase();
    official.contains(&claimed) || claimed.contains(&official)
}

fn exact_ignore_case(claimed: &str, official: &str) -> bool {
    claimed.to_lowercase() == official.to_lowercase()
}

fn string_outcome(
    label: FieldLabel,
    claimed: Option<&str>,
    official: Option<&str>,
    rule: fn(&str, &str) -> bool,
) -> FieldOutcome {
    let claimed_display = claimed.unwrap_or(ABSENT).to_string();
    let official_display = official.unwrap_or(ABSENT).to_string();

    match (claimed, official) {
        (Some(c), Some(o)) => FieldOutcome {
            label,
            claimed: claimed_display,
            official: official_display,
            tag: if rule(c, o) {
                OutcomeTag::Match
            } else {
                OutcomeTag::Mismatch
            },
        },
        _ => FieldOutcome::not_applicable(label, claimed_display, official_display),
    }
}

fn vote_count_outcome(claimed: Option<u64>, official: Option<u64>, tolerance: f64) -> FieldOutcome {
    let claimed_display = claimed.map(format_count).unwrap_or_else(|| ABSENT.into());
    let official_display = official.map(format_count).unwrap_or_else(|| ABSENT.into());

    match (claimed, official) {
        (Some(c), Some(o)) => FieldOutcome {
            label: FieldLabel::VoteCount,
            claimed: claimed_display,
            official: official_display,
            tag: if votes_within_tolerance(c, o, tolerance) {
                OutcomeTag::Match
            } else {
                OutcomeTag::Mismatch
            },
        },
        _ => FieldOutcome::not_applicable(FieldLabel::VoteCount, claimed_display, official_display),
    }
}

/// Relative error |claimed - official| / max(claimed, official) below the
/// tolerance. Two zero counts are equal by definition.
fn votes_within_tolerance(claimed: u64, official: u64, tolerance: f64) -> bool {
    if claimed == official {
        return true;
    }
    let max = claimed.max(official) as f64;
    let diff = claimed.abs_diff(official) as f64;
    diff / max < tolerance
}

fn percentage_outcome(
    claimed: Option<f64>,
    official: Option<f64>,
    tolerance: f64,
) -> FieldOutcome {
    let claimed_display = claimed.map(format_pct).unwrap_or_else(|| ABSENT.into());
    let official_display = official.map(format_pct).unwrap_or_else(|| ABSENT.into());

    match (claimed, official) {
        (Some(c), Some(o)) => FieldOutcome {
            label: FieldLabel::Percentage,
            claimed: claimed_display,
            official: official_display,
            tag: if (c - o).abs() <= tolerance {
                OutcomeTag::Match
            } else {
                OutcomeTag::Mismatch
            },
        },
        _ => {
            FieldOutcome::not_applicable(FieldLabel::Percentage, claimed_display, official_display)
        }
    }
}

/// Thousands-separated count for display ("1,009,000").
pub(crate) fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage for display, without trailing zero noise ("65%", "65.4%").
pub(crate) fn format_pct(pct: f64) -> String {
    if (pct - pct.round()).abs() < f64::EPSILON {
        format!("{}%", pct.round() as i64)
    } else {
        format!("{}%", pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> OfficialRecord {
        OfficialRecord {
            candidate_name: "Yoweri Kaguta Museveni".to_string(),
            party: "NRM".to_string(),
            position: "President".to_string(),
            district: "National".to_string(),
            vote_count: 1_009_000,
            percentage: 65.4,
            total_votes: 1_543_000,
            is_winner: true,
            source_name: "Uganda Electoral Commission".to_string(),
            source_url: None,
            last_updated: 1_700_000_000,
        }
    }

    fn tag_of(outcomes: &[FieldOutcome], label: FieldLabel) -> OutcomeTag {
        outcomes
            .iter()
            .find(|o| o.label == label)
            .map(|o| o.tag)
            .unwrap()
    }

    #[test]
    fn test_candidate_containment_tolerates_partial_names() {
        let extracted = ExtractedFields {
            candidate_name: Some("Museveni".to_string()),
            ..Default::default()
        };
        let outcomes = compare(&extracted, Some(&record()), &EngineConfig::default());
        assert_eq!(tag_of(&outcomes, FieldLabel::CandidateName), OutcomeTag::Match);
    }

    #[test]
    fn test_district_containment_tolerates_abbreviation() {
        let mut official = record();
        official.district = "Kampala Central Division".to_string();
        let extracted = ExtractedFields {
            district: Some("kampala central".to_string()),
            ..Default::default()
        };
        let outcomes = compare(&extracted, Some(&official), &EngineConfig::default());
        assert_eq!(tag_of(&outcomes, FieldLabel::District), OutcomeTag::Match);
    }

    #[test]
    fn test_party_requires_exact_equality() {
        let extracted = ExtractedFields {
            party: Some("nrm".to_string()),
            ..Default::default()
        };
        let outcomes = compare(&extracted, Some(&record()), &EngineConfig::default());
        assert_eq!(tag_of(&outcomes, FieldLabel::Party), OutcomeTag::Match);

        let extracted = ExtractedFields {
            party: Some("NUP".to_string()),
            ..Default::default()
        };
        let outcomes = compare(&extracted, Some(&record()), &EngineConfig::default());
        assert_eq!(tag_of(&outcomes, FieldLabel::Party), OutcomeTag::Mismatch);
    }

    #[test]
    fn test_vote_count_within_one_percent_matches() {
        let extracted = ExtractedFields {
            vote_count: Some(1_000_000),
            ..Default::default()
        };
        // relative error 9,000 / 1,009,000 ≈ 0.0089 < 0.01
        let outcomes = compare(&extracted, Some(&record()), &EngineConfig::default());
        assert_eq!(tag_of(&outcomes, FieldLabel::VoteCount), OutcomeTag::Match);
    }

    #[test]
    fn test_vote_count_beyond_one_percent_mismatches() {
        let mut official = record();
        official.vote_count = 1_020_000;
        let extracted = ExtractedFields {
            vote_count: Some(1_000_000),
            ..Default::default()
        };
        // relative error 20,000 / 1,020,000 ≈ 0.0196 > 0.01
        let outcomes = compare(&extracted, Some(&official), &EngineConfig::default());
        assert_eq!(tag_of(&outcomes, FieldLabel::VoteCount), OutcomeTag::Mismatch);
    }

    #[test]
    fn test_equal_zero_votes_match() {
        let mut official = record();
        official.vote_count = 0;
        let extracted = ExtractedFields {
            vote_count: Some(0),
            ..Default::default()
        };
        let outcomes = compare(&extracted, Some(&official), &EngineConfig::default());
        assert_eq!(tag_of(&outcomes, FieldLabel::VoteCount), OutcomeTag::Match);
    }

    #[test]
    fn test_percentage_within_half_point_matches() {
        let extracted = ExtractedFields {
            percentage: Some(65.0),
            ..Default::default()
        };
        let outcomes = compare(&extracted, Some(&record()), &EngineConfig::default());
        assert_eq!(tag_of(&outcomes, FieldLabel::Percentage), OutcomeTag::Match);
    }

    #[test]
    fn test_percentage_beyond_half_point_mismatches() {
        let mut official = record();
        official.percentage = 66.0;
        let extracted = ExtractedFields {
            percentage: Some(65.0),
            ..Default::default()
        };
        let outcomes = compare(&extracted, Some(&official), &EngineConfig::default());
        assert_eq!(tag_of(&outcomes, FieldLabel::Percentage), OutcomeTag::Mismatch);
    }

    #[test]
    fn test_absent_claim_fields_are_not_applicable() {
        let extracted = ExtractedFields {
            candidate_name: Some("Museveni".to_string()),
            ..Default::default()
        };
        let outcomes = compare(&extracted, Some(&record()), &EngineConfig::default());

        for label in [FieldLabel::Party, FieldLabel::District, FieldLabel::VoteCount, FieldLabel::Percentage] {
            assert_eq!(tag_of(&outcomes, label), OutcomeTag::NotApplicable);
        }
    }

    #[test]
    fn test_no_record_means_all_not_applicable() {
        let extracted = ExtractedFields {
            candidate_name: Some("Museveni".to_string()),
            vote_count: Some(100),
            percentage: Some(50.0),
            ..Default::default()
        };
        let outcomes = compare(&extracted, None, &EngineConfig::default());
        assert!(outcomes.iter().all(|o| o.tag == OutcomeTag::NotApplicable));
    }

    #[test]
    fn test_position_row_only_when_claimed() {
        let without = ExtractedFields {
            candidate_name: Some("Museveni".to_string()),
            ..Default::default()
        };
        let outcomes = compare(&without, Some(&record()), &EngineConfig::default());
        assert!(outcomes.iter().all(|o| o.label != FieldLabel::Position));

        let with = ExtractedFields {
            position: Some("President".to_string()),
            ..Default::default()
        };
        let outcomes = compare(&with, Some(&record()), &EngineConfig::default());
        assert_eq!(tag_of(&outcomes, FieldLabel::Position), OutcomeTag::Match);
    }

    #[test]
    fn test_outcome_order_is_stable() {
        let extracted = ExtractedFields {
            candidate_name: Some("Museveni".to_string()),
            party: Some("NRM".to_string()),
            district: Some("National".to_string()),
            vote_count: Some(1_009_000),
            percentage: Some(65.4),
            position: Some("President".to_string()),
            result_claim: Some("won".to_string()),
        };
        let outcomes = compare(&extracted, Some(&record()), &EngineConfig::default());
        let labels: Vec<FieldLabel> = outcomes.iter().map(|o| o.label).collect();
        assert_eq!(
            labels,
            vec![
                FieldLabel::CandidateName,
                FieldLabel::Party,
                FieldLabel::District,
                FieldLabel::VoteCount,
                FieldLabel::Percentage,
                FieldLabel::Position,
            ]
        );
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_009_000), "1,009,000");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(65.0), "65%");
        assert_eq!(format_pct(65.4), "65.4%");
    }
}
