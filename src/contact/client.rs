use http::StatusCode;
use serde_json::Value;

use super::form::SubmitOutcome;
use super::{ContactRequest, CONTACT_PATH};

/// POST `request` to the contact route under `origin`.
///
/// reqwest needs an absolute URL in the browser too, so the caller passes the
/// page origin.
pub async fn submit(origin: &str, request: &ContactRequest) -> SubmitOutcome {
    let url = format!("{}{}", origin.trim_end_matches('/'), CONTACT_PATH);
    let response = match reqwest::Client::new().post(&url).json(request).send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("contact request to {url} failed: {e}");
            return SubmitOutcome::NetworkFailure;
        }
    };
    let status = response.status();
    match response.text().await {
        Ok(body) => outcome_from_response(status, &body),
        Err(e) => {
            log::warn!("couldn't read contact response: {e}");
            SubmitOutcome::NetworkFailure
        }
    }
}

/// Map a status code and raw body to an outcome. The body must be JSON even
/// on success; anything else is treated like a dropped connection.
pub fn outcome_from_response(status: StatusCode, body: &str) -> SubmitOutcome {
    let json = match serde_json::from_str::<Value>(body) {
        Ok(json) => json,
        Err(_) => return SubmitOutcome::NetworkFailure,
    };
    if status.is_success() {
        SubmitOutcome::Delivered
    } else {
        SubmitOutcome::Rejected(json.get("error").and_then(Value::as_str).map(str::to_string))
    }
}
