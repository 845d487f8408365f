use auditdx_types::{CRITICAL_FIELDS, DiagnosisTier, FieldCheck, FieldStatus};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::thresholds::Thresholds;

/// What the analyzer concluded about a successful exchange body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
#[serde(rename_all = "snake_case")]
pub enum AnalysisOutcome {
    /// The backend reported a handled failure instead of audit data.
    /// No field scoring happens for these bodies.
    BackendError {
        error: String,
        message: Option<String>,
    },

    /// Field-by-field scoring of an audit payload
    Scored(ResponseAnalysis),
}

/// Scored view of one audit response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseAnalysis {
    /// Every critical field in fixed table order, exactly one entry each
    pub field_report: Vec<FieldCheck>,

    /// Percentage of critical fields present, integer-truncated
    pub completion_score: u8,

    pub tier: DiagnosisTier,

    /// Top-level key count of the response object
    pub total_fields: usize,

    pub samples: ResponseSamples,
}

impl ResponseAnalysis {
    pub fn count(&self, status: FieldStatus) -> usize {
        self.field_report
            .iter()
            .filter(|check| check.status == status)
            .count()
    }
}

/// Example values lifted out for display, never used for scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSamples {
    pub business_name: Option<String>,
    pub visibility_score: Option<serde_json::Number>,
    pub action_items: Option<ActionItemCounts>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItemCounts {
    pub critical: usize,
    pub moderate: usize,
}

/// Score a parsed audit response against the critical field table.
///
/// A top-level `error` key short-circuits to [`AnalysisOutcome::BackendError`];
/// otherwise every critical field is classified as present, null-or-empty,
/// or missing, and the completion score and tier are derived from the
/// present count.
pub fn analyze_response(body: &Map<String, Value>, thresholds: &Thresholds) -> AnalysisOutcome {
    if let Some(error) = body.get("error") {
        return AnalysisOutcome::BackendError {
            error: display_value(error),
            message: body.get("message").map(display_value),
        };
    }

    let field_report: Vec<FieldCheck> = CRITICAL_FIELDS
        .iter()
        .map(|&name| FieldCheck {
            name: name.to_string(),
            status: match body.get(name) {
                Some(value) => classify_value(value),
                None => FieldStatus::Missing,
            },
        })
        .collect();

    let present = field_report
        .iter()
        .filter(|check| check.status == FieldStatus::Present)
        .count();
    let completion_score = (present * 100 / CRITICAL_FIELDS.len()) as u8;

    AnalysisOutcome::Scored(ResponseAnalysis {
        field_report,
        completion_score,
        tier: derive_tier(completion_score, thresholds),
        total_fields: body.len(),
        samples: extract_samples(body),
    })
}

/// Severity band for a completion score
pub fn derive_tier(score: u8, thresholds: &Thresholds) -> DiagnosisTier {
    if score < thresholds.critical_below {
        DiagnosisTier::CriticalFailure
    } else if score < thresholds.partial_below {
        DiagnosisTier::PartialFailure
    } else {
        DiagnosisTier::MostlyWorking
    }
}

/// Null, the literal string "undefined", and whitespace-only strings all
/// count as empty; any other value is taken at face value.
fn classify_value(value: &Value) -> FieldStatus {
    match value {
        Value::Null => FieldStatus::NullOrEmpty,
        Value::String(s) if s == "undefined" || s.trim().is_empty() => FieldStatus::NullOrEmpty,
        _ => FieldStatus::Present,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn extract_samples(body: &Map<String, Value>) -> ResponseSamples {
    let visibility_score = match body.get("visibilityScore") {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    };

    let action_items = body
        .get("actionItems")
        .and_then(Value::as_object)
        .map(|items| ActionItemCounts {
            critical: array_len(items, "critical"),
            moderate: array_len(items, "moderate"),
        });

    ResponseSamples {
        business_name: body.get("businessName").map(display_value),
        visibility_score,
        action_items,
    }
}

fn array_len(obj: &Map<String, Value>, key: &str) -> usize {
    obj.get(key).and_then(Value::as_array).map_or(0, |a| a.len())
}
