use auditdx_types::{truncate_preview, ExchangeOutcome};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Audit endpoint, relative to the backend base URL
pub const AUDIT_PATH: &str = "/api/audit";

/// POST the sample payload and classify whatever comes back. Like the
/// probe, every transport fault folds into the outcome.
///
/// The deadline covers the whole exchange; the backend fans out to several
/// upstream services before answering, so callers pass a generous one.
pub fn run_audit_exchange(base_url: &str, payload: &Value, timeout: Duration) -> ExchangeOutcome {
    let client = match reqwest::blocking::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            return ExchangeOutcome::Failed {
                detail: e.to_string(),
            };
        }
    };

    let url = format!("{}{}", base_url.trim_end_matches('/'), AUDIT_PATH);
    let response = match client.post(&url).json(payload).send() {
        Ok(response) => response,
        Err(e) => return classify_transport_error(&e),
    };

    let status = response.status();
    let text = match response.text() {
        Ok(text) => text,
        Err(e) => {
            return ExchangeOutcome::Failed {
                detail: e.to_string(),
            };
        }
    };

    // only a 200 carries an audit payload; other 2xx codes mean the
    // backend did something unexpected and are reported as HTTP errors
    if status.as_u16() == 200 {
        return match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(body)) => ExchangeOutcome::Success { body },
            _ => ExchangeOutcome::MalformedJson {
                body_preview: truncate_preview(&text),
            },
        };
    }

    if status.as_u16() == 429 {
        return ExchangeOutcome::RateLimited {
            reason: duplicate_reason(&text),
        };
    }

    ExchangeOutcome::HttpError {
        code: status.as_u16(),
        body_preview: truncate_preview(&text),
    }
}

fn classify_transport_error(e: &reqwest::Error) -> ExchangeOutcome {
    if e.is_timeout() {
        ExchangeOutcome::TimedOut
    } else if e.is_connect() {
        ExchangeOutcome::Unreachable
    } else {
        ExchangeOutcome::Failed {
            detail: e.to_string(),
        }
    }
}

/// `duplicateInfo.reason` from a rate-limit body. `None` when the body has
/// no duplicate info at all; "Unknown" when the info block lacks a reason.
fn duplicate_reason(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    let info = value.get("duplicateInfo")?;
    Some(match info.get("reason") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "Unknown".to_string(),
    })
}

/// Default location of the response scratch file, overwritten on every
/// successful exchange
pub fn default_scratch_path() -> PathBuf {
    std::env::temp_dir().join("audit_response.json")
}

/// Persist the full response body for offline inspection. The JSON text is
/// rendered in memory first so the file lands in a single write.
pub fn save_response_scratch(body: &Map<String, Value>, path: &Path) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(body)?;
    std::fs::write(path, content)?;
    Ok(())
}
