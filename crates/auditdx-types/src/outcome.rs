use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Maximum number of characters preserved from a response body when the
/// full payload is not worth keeping (error pages, malformed JSON).
pub const BODY_PREVIEW_CHARS: usize = 500;

/// Truncate a body to the preview window, counting characters rather than
/// bytes so multi-byte content never splits mid-codepoint.
pub fn truncate_preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

/// Result of the backend liveness probe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
#[serde(rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// Backend answered with a 2xx status
    Healthy {
        /// Raw response body, usually a short status message
        status_text: String,
    },

    /// Backend answered with a non-2xx status
    UnexpectedStatus { code: u16 },

    /// Connection refused or no route to the backend
    Unreachable,

    /// No response within the health deadline
    TimedOut,

    /// Transport failure that fits none of the above
    Failed { detail: String },
}

impl ProbeOutcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, ProbeOutcome::Healthy { .. })
    }
}

/// Result of a full request/response exchange against the audit endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
#[serde(rename_all = "snake_case")]
pub enum ExchangeOutcome {
    /// 2xx response carrying a JSON object body
    Success {
        /// Parsed response document, handed to the analyzer as-is
        body: Map<String, Value>,
    },

    /// 429 response; the backend explains duplicate submissions here
    RateLimited {
        /// `duplicateInfo.reason` from the response body, when present
        reason: Option<String>,
    },

    /// Non-2xx, non-429 response
    HttpError { code: u16, body_preview: String },

    /// 2xx response whose body is not a JSON object
    MalformedJson { body_preview: String },

    /// Connection refused or no route to the backend
    Unreachable,

    /// No response within the exchange deadline
    TimedOut,

    /// Transport failure that fits none of the above
    Failed { detail: String },
}

impl ExchangeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExchangeOutcome::Success { .. })
    }
}
