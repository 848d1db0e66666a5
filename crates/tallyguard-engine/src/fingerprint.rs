//! Claim fingerprinting for caller-side caches
//!
//! The engine itself caches nothing; callers that deduplicate repeated
//! claims key them by this fingerprint of the normalized claim text.

use sha2::{Digest, Sha256};

/// Fingerprint a claim: SHA-256 of the normalized text, truncated to 16
/// hex characters.
///
/// Normalization lowercases and collapses whitespace so trivially
/// reworded submissions ("Museveni  won" vs "museveni won") share a key.
pub fn claim_fingerprint(claim_text: &str) -> String {
    let normalized = claim_text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let digest = Sha256::digest(normalized.as_bytes());
    let mut hex = String::with_capacity(16);
    for byte in digest.iter().take(8) {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable() {
        let a = claim_fingerprint("Museveni won Kampala with 65% of the vote");
        let b = claim_fingerprint("Museveni won Kampala with 65% of the vote");
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn test_fingerprint_normalizes_case_and_whitespace() {
        let a = claim_fingerprint("  Museveni   WON Kampala ");
        let b = claim_fingerprint("museveni won kampala");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_claims_differ() {
        let a = claim_fingerprint("Museveni won Kampala");
        let b = claim_fingerprint("Museveni lost Kampala");
        assert_ne!(a, b);
    }
}
