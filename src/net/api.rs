//! Playlist submission against the backend.
//!
//! The handler is written against [`HttpTransport`]; in the browser that is
//! [`GlooTransport`] (`gloo-net`), in tests an in-memory fake.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx response is an expected outcome, rendered into the status
//! element as raw JSON. Only transport failures surface as `Err`, and the
//! submit button is re-enabled on every path, including a dropped future.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::cell::Cell;
use std::rc::Rc;

use serde_json::{Map, Value};

use super::messages::{WORKING_MESSAGE, failure_message, success_message};
use super::types::{ApiErrorBody, PlaylistRequest, SubmissionResult};
use crate::error::UiError;
use crate::state::form::{FormElement, FormView};

/// Status code and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// `fetch`'s `Response.ok`: status in `200..=299`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body and returns the raw response.
///
/// Futures are `!Send`; everything runs on the browser event loop.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// POST `body` to `path` with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Network`] when no response was received.
    async fn post_json(&self, path: &str, body: String) -> Result<HttpResponse, UiError>;
}

/// How a completed submission ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    Created(SubmissionResult),
    Rejected { status: u16, payload: Value },
}

/// Response body as JSON; anything unparsable becomes `{}`.
fn parse_payload(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Keeps the submit button disabled for its lifetime.
struct SubmitLock<'a, V: FormView + ?Sized> {
    view: &'a V,
}

impl<'a, V: FormView + ?Sized> SubmitLock<'a, V> {
    fn acquire(view: &'a V) -> Self {
        view.set_disabled(FormElement::Submit, true);
        Self { view }
    }
}

impl<V: FormView + ?Sized> Drop for SubmitLock<'_, V> {
    fn drop(&mut self) {
        self.view.set_disabled(FormElement::Submit, false);
    }
}

/// Admits one submission at a time, independent of the button state.
#[derive(Clone, Debug, Default)]
pub struct SubmissionGate {
    busy: Rc<Cell<bool>>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pass if no other submission holds one. The gate reopens when the
    /// pass is dropped.
    pub fn try_enter(&self) -> Option<SubmissionPass> {
        if self.busy.replace(true) {
            return None;
        }
        Some(SubmissionPass {
            busy: Rc::clone(&self.busy),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

#[must_use = "the gate reopens as soon as the pass is dropped"]
#[derive(Debug)]
pub struct SubmissionPass {
    busy: Rc<Cell<bool>>,
}

impl Drop for SubmissionPass {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

/// Submit the form to `endpoint` and render the outcome into the status
/// element.
///
/// # Errors
///
/// Returns an error if the request could not be encoded or sent. The status
/// element then still shows the working message.
pub async fn create_playlist<V, T>(view: &V, transport: &T, endpoint: &str) -> Result<SubmissionOutcome, UiError>
where
    V: FormView + ?Sized,
    T: HttpTransport + ?Sized,
{
    view.set_value(FormElement::Status, WORKING_MESSAGE);
    let _lock = SubmitLock::acquire(view);

    let request = PlaylistRequest::from_form(view);
    let body = serde_json::to_string(&request)?;
    log::info!(
        "creating playlist: source={} limit={:?} public={}",
        request.source.as_str(),
        request.limit,
        request.public
    );

    let response = transport.post_json(endpoint, body).await?;
    let payload = parse_payload(&response.body);

    if !response.is_success() {
        let err = ApiErrorBody::from_payload(&payload);
        log::warn!(
            "create playlist failed: status={} error={:?} details={:?}",
            response.status,
            err.error,
            err.details
        );
        view.set_value(FormElement::Status, &failure_message(&payload));
        return Ok(SubmissionOutcome::Rejected {
            status: response.status,
            payload,
        });
    }

    let result = decode_result(payload);
    log::info!(
        "playlist created: id={} tracks={}",
        result.playlist_id,
        result.tracks_added
    );
    view.set_value(FormElement::Status, &success_message(&result));
    Ok(SubmissionOutcome::Created(result))
}

/// Decode a success payload; a malformed one yields empty fields.
fn decode_result(payload: Value) -> SubmissionResult {
    match serde_json::from_value(payload) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("unexpected success payload: {e}");
            SubmissionResult::default()
        }
    }
}

/// `fetch`-backed transport via `gloo-net`.
#[cfg(feature = "hydrate")]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl HttpTransport for GlooTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<HttpResponse, UiError> {
        let resp = gloo_net::http::Request::post(path)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| UiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| UiError::Network(e.to_string()))?;
        let status = resp.status();
        // An unreadable body is handled like an unparsable one.
        let body = resp.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}
