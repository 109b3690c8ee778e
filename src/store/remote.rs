//! Server-side preference storage for signed-in viewers.
//!
//! The request carries no payload: the server flips its own stored value and
//! answers with the result as `{"dark_mode": <bool>}`. The visual toggle has
//! already happened by the time the request is sent, so a failure leaves the
//! page and the server out of step until the next page load.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::rc::Rc;

use serde::Deserialize;

use super::{Channel, PersistError, ThemeStore};
use crate::theme::ThemeMode;

/// Completion callback for a single request.
pub type Completion = Box<dyn FnOnce(Result<serde_json::Value, PersistError>)>;

/// Non-blocking HTTP client used by [`RemoteStore`].
pub trait Transport {
    /// POST an empty body with `Content-Type: application/json` and deliver
    /// the decoded JSON response to `done`.
    fn post_json(&self, endpoint: &str, done: Completion);
}

#[derive(Debug, Deserialize)]
struct ToggleAck {
    dark_mode: bool,
}

/// Server's stored value, if the acknowledgement carries one.
fn acknowledged_mode(body: &serde_json::Value) -> Option<ThemeMode> {
    ToggleAck::deserialize(body)
        .ok()
        .map(|ack| ThemeMode::from_dark(ack.dark_mode))
}

fn report(shown: ThemeMode, result: Result<serde_json::Value, PersistError>) {
    match result {
        Ok(body) => {
            log::info!("dark mode preference saved: {body}");
            if let Some(stored) = acknowledged_mode(&body) {
                if stored != shown {
                    log::warn!("server stored {stored:?} but page shows {shown:?}");
                }
            }
        }
        Err(e) => log::error!("error saving dark mode preference: {e}"),
    }
}

/// `gloo-net` transport; the request runs on the browser task queue.
#[cfg(feature = "hydrate")]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
async fn post_empty_json(endpoint: &str) -> Result<serde_json::Value, PersistError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| PersistError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(PersistError::Status(resp.status()));
    }
    resp.json::<serde_json::Value>()
        .await
        .map_err(|e| PersistError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
impl Transport for GlooTransport {
    fn post_json(&self, endpoint: &str, done: Completion) {
        let endpoint = endpoint.to_owned();
        leptos::task::spawn_local(async move {
            done(post_empty_json(&endpoint).await);
        });
    }
}

/// Preference channel backed by the toggle endpoint.
pub struct RemoteStore {
    transport: Rc<dyn Transport>,
    endpoint: String,
}

impl RemoteStore {
    pub fn new(transport: Rc<dyn Transport>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }
}

impl ThemeStore for RemoteStore {
    fn channel(&self) -> Channel {
        Channel::Remote
    }

    fn persist(&self, mode: ThemeMode) {
        self.transport
            .post_json(&self.endpoint, Box::new(move |result| report(mode, result)));
    }
}
