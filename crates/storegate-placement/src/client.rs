//! HTTP client for the placement service.
//!
//! The gate consumes four operations: store listing, eviction-scheduler
//! listing, configuration retrieval, and eviction termination. `PlacementApi`
//! expresses that capability set as a trait so the decision core can run
//! against a scripted stub in tests; `PlacementClient` is the real
//! implementation.

use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use http::{Method, StatusCode};
use http_body_util::BodyExt;
use tracing::debug;

use crate::error::{PlacementError, PlacementResult};
use crate::types::{
    EVICT_LEADER_SCHEDULER, PlacementConfig, StoresInfo, evict_leader_scheduler_name,
};

/// The capability set this gate consumes from the placement service.
pub trait PlacementApi {
    /// Snapshot of all stores known to the placement service.
    fn get_stores(&self) -> impl Future<Output = PlacementResult<StoresInfo>> + Send;

    /// Names of the active leader-eviction schedulers.
    fn get_evict_leader_schedulers(
        &self,
    ) -> impl Future<Output = PlacementResult<Vec<String>>> + Send;

    /// The full configuration document.
    fn get_config(&self) -> impl Future<Output = PlacementResult<PlacementConfig>> + Send;

    /// Remove the leader-eviction schedule targeting `store_id`.
    fn end_evict_leader(&self, store_id: u64) -> impl Future<Output = PlacementResult<()>> + Send;
}

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Plain-HTTP client for one placement service endpoint.
///
/// Opens one connection per call: the gate reads a fresh topology snapshot
/// per admission decision, so there is nothing worth pooling or caching.
#[derive(Debug, Clone)]
pub struct PlacementClient {
    base_url: String,
    timeout: Duration,
}

impl PlacementClient {
    /// Create a client for `base_url` (e.g. `http://placement:2379`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `host:port` portion of the base URL.
    fn authority(&self) -> &str {
        self.base_url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.base_url)
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one request and collect the response body.
    async fn request(&self, method: Method, path: &str) -> PlacementResult<(StatusCode, Bytes)> {
        let url = self.url_for(path);
        let authority = self.authority().to_string();

        let transport = |source: anyhow::Error| PlacementError::Transport {
            url: url.clone(),
            source,
        };

        let call = async {
            let stream = tokio::net::TcpStream::connect(&authority)
                .await
                .map_err(|e| transport(anyhow::Error::new(e)))?;

            let io = hyper_util::rt::TokioIo::new(stream);
            let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
                .await
                .map_err(|e| transport(anyhow::Error::new(e)))?;

            // Drive the connection in the background.
            tokio::spawn(async move {
                let _ = conn.await;
            });

            let req = http::Request::builder()
                .method(method)
                .uri(path)
                .header("host", &authority)
                .header("user-agent", "storegate/0.1")
                .body(http_body_util::Empty::<Bytes>::new())
                .map_err(|e| transport(anyhow::Error::new(e)))?;

            let resp = sender
                .send_request(req)
                .await
                .map_err(|e| transport(anyhow::Error::new(e)))?;

            let status = resp.status();
            let body = resp
                .into_body()
                .collect()
                .await
                .map_err(|e| transport(anyhow::Error::new(e)))?
                .to_bytes();

            Ok((status, body))
        };

        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(PlacementError::Timeout {
                url,
                timeout: self.timeout,
            }),
        }
    }

    async fn get_json<T>(&self, path: &str) -> PlacementResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let (status, body) = self.request(Method::GET, path).await?;
        if !status.is_success() {
            return Err(self.api_error(path, status, &body));
        }
        serde_json::from_slice(&body).map_err(|source| PlacementError::Decode {
            url: self.url_for(path),
            source,
        })
    }

    fn api_error(&self, path: &str, status: StatusCode, body: &[u8]) -> PlacementError {
        PlacementError::Api {
            url: self.url_for(path),
            status: status.as_u16(),
            message: String::from_utf8_lossy(body).into_owned(),
        }
    }
}

impl PlacementApi for PlacementClient {
    async fn get_stores(&self) -> PlacementResult<StoresInfo> {
        self.get_json("/pd/api/v1/stores").await
    }

    async fn get_evict_leader_schedulers(&self) -> PlacementResult<Vec<String>> {
        let names: Vec<String> = self.get_json("/pd/api/v1/schedulers").await?;
        Ok(names
            .into_iter()
            .filter(|name| name.starts_with(EVICT_LEADER_SCHEDULER))
            .collect())
    }

    async fn get_config(&self) -> PlacementResult<PlacementConfig> {
        self.get_json("/pd/api/v1/config").await
    }

    async fn end_evict_leader(&self, store_id: u64) -> PlacementResult<()> {
        let path = format!(
            "/pd/api/v1/schedulers/{}",
            evict_leader_scheduler_name(store_id)
        );
        let (status, body) = self.request(Method::DELETE, &path).await?;
        if status == StatusCode::NOT_FOUND {
            // Already removed by another actor; the state we want holds.
            debug!(store_id, "eviction schedule already gone");
            return Ok(());
        }
        if !status.is_success() {
            return Err(self.api_error(&path, status, &body));
        }
        debug!(store_id, "eviction schedule removed");
        Ok(())
    }
}
