use auditdx_types::DiagnosisTier;
use serde::{Deserialize, Serialize};

/// Follow-up actions that apply to every diagnostic run
const NEXT_STEPS: [&str; 4] = [
    "Run analyzer: npm run analyze-tool (in backend directory)",
    "Check backend console logs for detailed errors",
    "Test individual services",
    "Compare with expected ActivePieces structure",
];

/// Tier-matched guidance attached to the end of a diagnostic run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierAdvice {
    pub headline: String,

    /// Root-cause line shown under the headline, when the tier implies one
    pub summary: Option<String>,

    /// Immediate changes worth making
    pub fixes: Vec<String>,

    /// Ordered shell-level walkthrough, populated only for critical failures
    pub fix_steps: Vec<String>,
}

/// Final advice block: tier guidance plus the collected issue tags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemediationReport {
    /// Severity of the scored response, absent when no exchange was analyzed
    pub tier: Option<DiagnosisTier>,

    /// `None` exactly when `tier` is `None`
    pub advice: Option<TierAdvice>,

    /// Issue tags collected by the scans, echoed verbatim and in order
    pub issues: Vec<String>,

    pub next_steps: Vec<String>,
}

/// Assemble the remediation block for a finished run. Pure: the same tier
/// and issue list always produce the same report.
pub fn build_remediation(tier: Option<DiagnosisTier>, issues: &[String]) -> RemediationReport {
    RemediationReport {
        tier,
        advice: tier.map(advice_for),
        issues: issues.to_vec(),
        next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
    }
}

fn advice_for(tier: DiagnosisTier) -> TierAdvice {
    match tier {
        DiagnosisTier::CriticalFailure => TierAdvice {
            headline: "CRITICAL ISSUE: Data Pipeline Failure".to_string(),
            summary: Some(
                "auditProcessor.js not aggregating service data properly".to_string(),
            ),
            fixes: string_list(&[
                "Replace auditProcessor.js with comprehensive version",
                "Ensure all services export proper methods",
                "Check for import/export mismatches",
            ]),
            fix_steps: string_list(&[
                "Backup: cp services/auditProcessor.js services/auditProcessor.js.backup",
                "Replace with comprehensive processor",
                "Restart backend: npm run dev",
                "Re-test with this tool",
            ]),
        },
        DiagnosisTier::PartialFailure => TierAdvice {
            headline: "MODERATE ISSUE: Partial Data Pipeline".to_string(),
            summary: Some(
                "Some services working, but missing key data structures".to_string(),
            ),
            fixes: string_list(&[
                "Update auditProcessor.js to return comprehensive data",
                "Check individual service implementations",
                "Verify service method names match processor expectations",
            ]),
            fix_steps: Vec::new(),
        },
        DiagnosisTier::MostlyWorking => TierAdvice {
            headline: "Pipeline Mostly Working".to_string(),
            summary: None,
            fixes: string_list(&[
                "Check for undefined values in response",
                "Add better error handling",
                "Enhance data validation",
            ]),
            fix_steps: Vec::new(),
        },
    }
}

fn string_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
