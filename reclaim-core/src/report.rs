//! Report records and the identifiers they carry.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Fixed-point confidence scale: 10000 = 100%.
pub const CONFIDENCE_SCALE: u16 = 10_000;

/// Lost or Found classification of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Lost,
    Found,
}

impl ReportKind {
    /// The kind a matching counterpart must have.
    pub fn counterpart(self) -> Self {
        match self {
            Self::Lost => Self::Found,
            Self::Found => Self::Lost,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lost => f.write_str("lost"),
            Self::Found => f.write_str("found"),
        }
    }
}

/// Lifecycle state of a report.
///
/// Transitions only move forward: Open reports become Matched through a
/// claim, and a Matched pair terminates as Claimed (lost side) and Closed
/// (found side). No transition returns a report to Open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Open,
    Matched,
    Claimed,
    Closed,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Matched => f.write_str("matched"),
            Self::Claimed => f.write_str("claimed"),
            Self::Closed => f.write_str("closed"),
        }
    }
}

/// Error parsing a hex-encoded feature digest.
#[derive(Error, Debug)]
pub enum DigestParseError {
    #[error("digest must be {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("invalid hex in digest: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Fixed-size hash summarizing an externally computed feature vector.
///
/// Opaque to the registry: digests are stored, compared, and mixed as raw
/// bytes, never decoded. Travels over the wire as a 64-character hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureDigest(pub [u8; 32]);

impl FeatureDigest {
    /// Digest length in bytes.
    pub const LEN: usize = 32;

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for FeatureDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for FeatureDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeatureDigest({}..)", hex::encode(&self.0[..8]))
    }
}

impl FromStr for FeatureDigest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        if bytes.len() != Self::LEN {
            return Err(DigestParseError::Length {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }

        let mut digest = [0u8; Self::LEN];
        digest.copy_from_slice(&bytes);
        Ok(Self(digest))
    }
}

impl Serialize for FeatureDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for FeatureDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A single lost- or found-item submission record.
///
/// Everything except `status` and `matched_with` is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Dense identifier assigned by the registry, starting at 1. Never reused.
    pub id: u64,
    /// Opaque principal identifier of the submitter.
    pub reporter: String,
    pub kind: ReportKind,
    /// Free-text classifier; match candidates must agree exactly.
    pub category: String,
    pub description: String,
    /// Opaque reference to externally stored media, never resolved here.
    pub media_ref: String,
    pub feature_digest: FeatureDigest,
    /// Externally computed probability on the [`CONFIDENCE_SCALE`] scale.
    pub confidence: u16,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub status: ReportStatus,
    /// Counterpart report id once the pair is matched; symmetric.
    pub matched_with: Option<u64>,
}

/// Caller-supplied fields for creating a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSubmission {
    pub kind: ReportKind,
    pub category: String,
    pub description: String,
    pub media_ref: String,
    pub feature_digest: FeatureDigest,
    pub confidence: u16,
    pub location: String,
}
