//! HTTP client for the HubSpot contacts v1 API.
//!
//! `HubSpotClient` is a synchronous `ureq` transport. The resource clients
//! (`HubSpotContactsClient`, `HubSpotContactListClient`) expose it through
//! async traits by running each call on the blocking thread pool, so a batch
//! of calls can be in flight at once without stalling the runtime.
//!
//! Every operation classifies the HTTP status into a closed response enum.
//! Documented 4xx answers come back as data; any other status fails with
//! [`HubSpotClientError`].

mod contact_lists;
mod contacts;
pub mod requests;
pub mod responses;

pub use contact_lists::{ContactListClient, HubSpotContactListClient};
pub use contacts::{ContactsClient, HubSpotContactsClient};

use crate::config::Config;
use crate::error::{ClientResult, HubSpotClientError};
use crate::metrics::{HttpTimer, Metrics};
use responses::HubSpotError;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Raw status and body of a completed exchange.
#[derive(Debug)]
struct RawResponse {
    status: u16,
    body: String,
}

impl RawResponse {
    fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    fn problem(&self) -> HubSpotError {
        HubSpotError::from_body(&self.body)
    }
}

/// Synchronous HubSpot transport shared by the resource clients.
#[derive(Clone)]
pub struct HubSpotClient {
    /// Base URL for the HubSpot API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl HubSpotClient {
    /// Create a new HubSpotClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.hubspot_api_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a HubSpotClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self::build(base_url, Duration::from_secs(10))
    }

    fn build(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request authenticated with `hapi_key`.
    fn get(
        &self,
        path: &str,
        hapi_key: &str,
        query: &[(&str, String)],
        context: &str,
    ) -> ClientResult<RawResponse> {
        let url = self.build_url(path);
        tracing::debug!("GET {}", url);

        let timer = HttpTimer::new(self.metrics.clone());
        let mut request = self.agent.get(&url).query("hapikey", hapi_key);
        for (name, value) in query {
            request = request.query(name, value);
        }

        self.exchange(timer, request.call(), context)
    }

    /// Execute a POST request authenticated with `hapi_key` with a JSON body.
    fn post(
        &self,
        path: &str,
        hapi_key: &str,
        body: &serde_json::Value,
        context: &str,
    ) -> ClientResult<RawResponse> {
        let url = self.build_url(path);
        tracing::debug!("POST {}", url);

        let timer = HttpTimer::new(self.metrics.clone());
        let request = self
            .agent
            .post(&url)
            .query("hapikey", hapi_key)
            .set("Content-Type", "application/json");

        self.exchange(timer, request.send_json(body), context)
    }

    /// Turn a ureq result into a raw response. Error statuses are data at
    /// this level; only transport failures are faults. `timer` must be
    /// started before the request is sent.
    fn exchange(
        &self,
        timer: HttpTimer,
        result: Result<ureq::Response, ureq::Error>,
        context: &str,
    ) -> ClientResult<RawResponse> {
        let outcome = match result {
            Ok(response) => {
                let status = response.status();
                response
                    .into_string()
                    .map(|body| RawResponse { status, body })
                    .map_err(|e| Self::transport(context, e))
            }
            Err(ureq::Error::Status(status, response)) => Ok(RawResponse {
                status,
                body: response.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(transport)) => Err(Self::transport(context, transport)),
        };

        match &outcome {
            Ok(raw) if raw.status < 400 => timer.complete(),
            Ok(raw) => {
                tracing::debug!("{} - status {}", context, raw.status);
                timer.complete_with_error();
            }
            Err(e) => {
                tracing::error!("{:?}", e);
                timer.complete_with_error();
            }
        }

        outcome
    }

    fn transport(context: &str, reason: impl std::fmt::Display) -> HubSpotClientError {
        HubSpotClientError::Transport {
            message: context.to_string(),
            reason: reason.to_string(),
        }
    }

    fn unexpected(context: &str, status: u16) -> HubSpotClientError {
        HubSpotClientError::UnexpectedStatus {
            status,
            message: context.to_string(),
        }
    }
}

/// Run a blocking client call on the blocking thread pool.
async fn run_blocking<T, F>(call: F) -> ClientResult<T>
where
    F: FnOnce() -> ClientResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| HubSpotClientError::Transport {
            message: "Task join error".to_string(),
            reason: e.to_string(),
        })?
}
