//! Similarity scoring seam.
//!
//! The registry depends only on the [`SimilarityScorer`] contract. The shipped
//! [`DigestMixScorer`] is a deterministic placeholder for an external
//! vector-similarity service; deployments with real matching substitute their
//! own implementation without touching the registry's control flow.

use sha3::{Digest, Sha3_256};

use crate::report::FeatureDigest;

/// Minimum confidence and minimum similarity score for a potential match,
/// on the fixed-point confidence scale.
pub const MATCH_THRESHOLD: u32 = 8_500;

/// Pure similarity oracle over two feature digests.
pub trait SimilarityScorer: Send + Sync {
    /// Score a candidate pair on the fixed-point confidence scale.
    ///
    /// Must be deterministic: the same inputs always produce the same score.
    fn score(
        &self,
        a: &FeatureDigest,
        b: &FeatureDigest,
        confidence_a: u16,
        confidence_b: u16,
    ) -> u32;
}

/// Placeholder scorer standing in for an externally computed cosine similarity.
///
/// Mixes the two digests through SHA3-256 to derive a base in `[0, 3000)`,
/// then adds `7000` and a confidence term of `(confidence_a + confidence_b) / 200`,
/// yielding scores in `[7000, 10100)`. Bit-reproducible, but NOT a real
/// similarity metric.
#[derive(Debug, Default, Clone, Copy)]
pub struct DigestMixScorer;

impl SimilarityScorer for DigestMixScorer {
    fn score(
        &self,
        a: &FeatureDigest,
        b: &FeatureDigest,
        confidence_a: u16,
        confidence_b: u16,
    ) -> u32 {
        let mut hasher = Sha3_256::new();
        hasher.update(a.as_bytes());
        hasher.update(b.as_bytes());
        let mixed = hasher.finalize();

        let mut word = [0u8; 8];
        word.copy_from_slice(&mixed[..8]);
        let base = (u64::from_le_bytes(word) % 3_000) as u32;

        let confidence_term = (u32::from(confidence_a) + u32::from(confidence_b)) / 200;
        7_000 + base + confidence_term
    }
}

/// Scorer returning the same score for every pair.
///
/// Used in tests to force the scan down a known branch, and as a wiring
/// option where match emission should be all-or-nothing.
#[derive(Debug, Clone, Copy)]
pub struct FixedScorer(pub u32);

impl SimilarityScorer for FixedScorer {
    fn score(
        &self,
        _a: &FeatureDigest,
        _b: &FeatureDigest,
        _confidence_a: u16,
        _confidence_b: u16,
    ) -> u32 {
        self.0
    }
}
