//! Network fetching utilities with timeout support.
//!
//! Wraps the browser Fetch API for the three request shapes the site needs:
//! JSON GETs (listings, current user), a JSON POST (login), and multipart
//! POSTs (the creation forms). Every request races a timeout.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::{FetchError, SubmitError};

// =============================================================================
// Promise Racing
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
///
/// The timeout promise resolves to `undefined`, which fetch responses never
/// are, so an undefined winner means the timeout fired first.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Request Building
// =============================================================================

/// Bearer-token headers for authorized requests.
fn bearer_headers(token: &str) -> Result<Headers, FetchError> {
    let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
    headers
        .append("Authorization", &format!("Bearer {}", token))
        .map_err(|_| FetchError::RequestCreationFailed)?;
    Ok(headers)
}

/// Dispatch a request and race it against the configured timeout.
///
/// Does not inspect the HTTP status; callers decide how non-2xx responses
/// map into their error domain.
async fn send(request: Request) -> Result<Response, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            result.dyn_into().map_err(|_| FetchError::InvalidContent)
        }
    }
}

/// Read a response body as text.
async fn response_text(resp: &Response) -> Result<String, FetchError> {
    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;
    text.as_string().ok_or(FetchError::InvalidContent)
}

// =============================================================================
// JSON GET
// =============================================================================

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    fetch_json_inner(url, None).await
}

/// Fetch and parse JSON with a bearer token attached.
pub async fn fetch_json_auth<T: DeserializeOwned>(
    url: &str,
    token: &str,
) -> Result<T, FetchError> {
    fetch_json_inner(url, Some(token)).await
}

async fn fetch_json_inner<T: DeserializeOwned>(
    url: &str,
    token: Option<&str>,
) -> Result<T, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    if let Some(token) = token {
        opts.set_headers(bearer_headers(token)?.as_ref());
    }

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::RequestCreationFailed)?;
    let resp = send(request).await?;
    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = response_text(&resp).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

// =============================================================================
// JSON POST
// =============================================================================

/// POST a JSON body and parse the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, FetchError> {
    let payload =
        serde_json::to_string(body).map_err(|e| FetchError::JsonParseError(e.to_string()))?;

    let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
    headers
        .append("Content-Type", "application/json")
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_headers(headers.as_ref());
    opts.set_body(&JsValue::from_str(&payload));

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::RequestCreationFailed)?;
    let resp = send(request).await?;
    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = response_text(&resp).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

// =============================================================================
// Multipart POST (creation forms)
// =============================================================================

/// Success payload of the creation endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Failure payload of the creation endpoints.
#[derive(Debug, serde::Deserialize)]
struct ApiDetail {
    detail: String,
}

/// POST a multipart form to a creation endpoint.
///
/// The backend answers `{message}` on success and `{detail}` on failure.
/// HTTP 409 is reported as [`SubmitError::Conflict`] so the member form can
/// show its duplicate-email message.
pub async fn post_form(
    url: &str,
    form: &FormData,
    token: Option<&str>,
) -> Result<ApiMessage, SubmitError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());
    if let Some(token) = token {
        opts.set_headers(bearer_headers(token)?.as_ref());
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;
    let resp = send(request).await?;
    let status = resp.status();
    let text = response_text(&resp).await?;

    if resp.ok() {
        return serde_json::from_str(&text)
            .map_err(|e| SubmitError::Transport(FetchError::JsonParseError(e.to_string())));
    }

    let detail = serde_json::from_str::<ApiDetail>(&text)
        .map(|d| d.detail)
        .unwrap_or_else(|_| crate::config::messages::SUBMIT_FAILED.to_string());

    if status == 409 {
        Err(SubmitError::Conflict(detail))
    } else {
        Err(SubmitError::Rejected(detail))
    }
}
