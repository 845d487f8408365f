use serde::{Deserialize, Serialize};
use std::fmt;

/// Presence classification for one critical response field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    /// Key exists and carries a usable value
    Present,
    /// Key exists but the value is null, "undefined", or blank
    NullOrEmpty,
    /// Key absent from the response object
    Missing,
}

/// One critical field checked against the response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub name: String,
    pub status: FieldStatus,
}

/// Severity band derived from the completion score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisTier {
    /// Most data missing, aggregation is likely broken
    CriticalFailure,
    /// Some data present but key structures are incomplete
    PartialFailure,
    /// Most critical fields populated
    MostlyWorking,
}

impl fmt::Display for DiagnosisTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosisTier::CriticalFailure => write!(f, "critical failure"),
            DiagnosisTier::PartialFailure => write!(f, "partial failure"),
            DiagnosisTier::MostlyWorking => write!(f, "mostly working"),
        }
    }
}

/// Size classification for one backend service source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
#[serde(rename_all = "snake_case")]
pub enum ArtifactClassification {
    /// File absent from the services directory
    Missing,

    /// Stub: line count below the too-short threshold
    TooShort(usize),

    /// Skeleton implementation below the basic threshold
    Basic(usize),

    /// Large enough to plausibly do its job
    Comprehensive(usize),

    /// File exists but could not be read
    ReadError(String),
}

impl ArtifactClassification {
    pub fn line_count(&self) -> Option<usize> {
        match self {
            ArtifactClassification::TooShort(n)
            | ArtifactClassification::Basic(n)
            | ArtifactClassification::Comprehensive(n) => Some(*n),
            _ => None,
        }
    }

    /// Issue tag suffix for this classification, `None` when the file
    /// is healthy. Issue entries are formatted as `"<name>: <suffix>"`.
    pub fn issue_suffix(&self) -> Option<&'static str> {
        match self {
            ArtifactClassification::Missing => Some("missing"),
            ArtifactClassification::TooShort(_) => Some("too_short"),
            ArtifactClassification::Basic(_) => Some("basic"),
            ArtifactClassification::ReadError(_) => Some("read_error"),
            ArtifactClassification::Comprehensive(_) => None,
        }
    }
}

/// One expected pattern probed for inside the processor source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerCheck {
    /// Substring searched for (case-sensitive)
    pub pattern: String,
    /// Human explanation of what the pattern indicates
    pub description: String,
    pub present: bool,
}
