// Engine module - pure analysis logic (field scoring, artifact sizing, remediation)
// This layer sits between domain types and runtime I/O; nothing here touches
// the network or the filesystem

pub mod analyzer;
pub mod artifact;
pub mod recommend;
pub mod thresholds;

pub use analyzer::{
    analyze_response, derive_tier, ActionItemCounts, AnalysisOutcome, ResponseAnalysis,
    ResponseSamples,
};
pub use artifact::{classify_source, scan_markers};
pub use recommend::{build_remediation, RemediationReport, TierAdvice};
pub use thresholds::Thresholds;
