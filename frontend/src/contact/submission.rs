//! One-shot delivery of a validated form to the configured webhook.
//!
//! The webhook sits on another origin and is called in `no-cors` mode, so
//! its response is opaque: a request that did not fail counts as sent. We
//! cannot tell whether the remote side actually stored anything.

use gloo_net::http::Request;
use log::{debug, error, info, warn};
use thiserror::Error;
use web_sys::{RequestCache, RequestMode};

use crate::contact::payload::ContactPayload;
use crate::contact::snapshot::FormSnapshot;
use crate::dom::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Configured(String),
    Unconfigured,
}

impl Endpoint {
    /// Blank values and the template placeholder both mean "not configured".
    pub fn resolve(raw: Option<&str>, placeholder: &str) -> Self {
        match raw.map(str::trim) {
            Some(url) if !url.is_empty() && url != placeholder => Endpoint::Configured(url.to_string()),
            _ => Endpoint::Unconfigured,
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends `body` once. `Ok` only means the request went out without error.
    async fn post_json(&self, url: &str, body: String) -> Result<(), TransportError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<(), TransportError> {
        Request::post(url)
            .mode(RequestMode::NoCors)
            .cache(RequestCache::NoCache)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| TransportError::Network(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    NetworkFailure,
    /// No webhook configured; the form is treated as received locally.
    Unconfigured,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
}

/// Disables the submit control and shows the busy label for as long as it
/// lives. Dropping it restores the control whatever path the submit took.
pub struct SubmitLock<E: Element> {
    control: E,
    original_label: String,
}

impl<E: Element> SubmitLock<E> {
    pub fn acquire(control: &E, busy_label: &str) -> Result<Self, SubmitError> {
        if control.is_disabled() {
            return Err(SubmitError::InFlight);
        }
        let original_label = control.inner_html();
        control.set_disabled(true);
        control.set_inner_html(busy_label);
        Ok(Self {
            control: control.clone(),
            original_label,
        })
    }
}

impl<E: Element> Drop for SubmitLock<E> {
    fn drop(&mut self) {
        self.control.set_inner_html(&self.original_label);
        self.control.set_disabled(false);
    }
}

pub struct SubmissionPipeline<T> {
    transport: T,
}

impl<T: Transport> SubmissionPipeline<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Makes exactly one delivery attempt. No retries.
    pub async fn send(&self, snapshot: &FormSnapshot, endpoint: &Endpoint) -> SubmissionOutcome {
        let payload = ContactPayload::from_snapshot(snapshot);

        let url = match endpoint {
            Endpoint::Configured(url) => url,
            Endpoint::Unconfigured => {
                warn!("Contact endpoint not configured, submission kept local");
                return SubmissionOutcome::Unconfigured;
            }
        };

        let result = match payload.to_json() {
            Ok(body) => {
                debug!("Posting contact form ({} bytes)", body.len());
                self.transport.post_json(url, body).await
            }
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(()) => {
                info!("Contact form sent for service {:?}", payload.service);
                SubmissionOutcome::Success
            }
            Err(e) => {
                error!("Submission error: {}", e);
                SubmissionOutcome::NetworkFailure
            }
        }
    }
}
