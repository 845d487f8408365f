use auditdx_types::ProbeOutcome;
use std::time::Duration;

/// Health endpoint, relative to the backend base URL
pub const HEALTH_PATH: &str = "/api/health";

/// Probe backend liveness with a single bounded GET.
///
/// Every transport fault folds into the outcome; callers never see an `Err`.
pub fn check_backend(base_url: &str, timeout: Duration) -> ProbeOutcome {
    let client = match reqwest::blocking::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            return ProbeOutcome::Failed {
                detail: e.to_string(),
            };
        }
    };

    let url = format!("{}{}", base_url.trim_end_matches('/'), HEALTH_PATH);
    match client.get(&url).send() {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                match response.text() {
                    Ok(status_text) => ProbeOutcome::Healthy { status_text },
                    Err(e) => ProbeOutcome::Failed {
                        detail: e.to_string(),
                    },
                }
            } else {
                ProbeOutcome::UnexpectedStatus {
                    code: status.as_u16(),
                }
            }
        }
        Err(e) => classify_transport_error(&e),
    }
}

fn classify_transport_error(e: &reqwest::Error) -> ProbeOutcome {
    if e.is_timeout() {
        ProbeOutcome::TimedOut
    } else if e.is_connect() {
        ProbeOutcome::Unreachable
    } else {
        ProbeOutcome::Failed {
            detail: e.to_string(),
        }
    }
}
