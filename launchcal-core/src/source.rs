//! Event source: one best-effort read of the events endpoint per activation.
//!
//! Each activation is tagged with a [`RequestToken`]. A completion is only
//! applied while its token is the latest one issued, so a slow response for
//! an old URL can never overwrite a newer one.

use std::future::Future;

use tracing::{debug, error, info};

use crate::error::{LaunchCalError, LaunchCalResult};
use crate::event::{LaunchEvent, parse_events};

const USER_AGENT: &str = concat!("launchcal/", env!("CARGO_PKG_VERSION"));

/// Something that can turn an events URL into a list of events.
pub trait EventFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = LaunchCalResult<Vec<LaunchEvent>>>;
}

/// Fetches events (and preloads images) over HTTP.
#[derive(Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> LaunchCalResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(HttpFetcher { http })
    }

    /// Download an image fully, succeeding once the bytes are in.
    pub async fn preload_image(&self, url: &str) -> LaunchCalResult<usize> {
        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(LaunchCalError::Status(resp.status().as_u16()));
        }
        let body = resp.bytes().await?;
        Ok(body.len())
    }
}

impl EventFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> LaunchCalResult<Vec<LaunchEvent>> {
        let resp = self.http.get(url).send().await?;

        if !resp.status().is_success() {
            return Err(LaunchCalError::Status(resp.status().as_u16()));
        }

        let body = resp.bytes().await?;
        Ok(parse_events(&body)?)
    }
}

/// Identifies one activation of an [`EventSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Observable state of the events endpoint.
pub struct EventSource {
    url: String,
    events: Vec<LaunchEvent>,
    error: Option<LaunchCalError>,
    is_loading: bool,
    latest: u64,
}

impl EventSource {
    pub fn new(url: impl Into<String>) -> Self {
        EventSource {
            url: url.into(),
            events: Vec::new(),
            error: None,
            is_loading: false,
            latest: 0,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Events from the last successful read, in response order.
    pub fn events(&self) -> &[LaunchEvent] {
        &self.events
    }

    pub fn error(&self) -> Option<&LaunchCalError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Start an activation. Any earlier outstanding token becomes stale.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.is_loading = true;
        RequestToken(self.latest)
    }

    /// Apply the outcome of the activation `token`.
    ///
    /// Returns false (and changes nothing) if a newer activation was begun.
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: LaunchCalResult<Vec<LaunchEvent>>,
    ) -> bool {
        if token.0 != self.latest {
            debug!(
                token = token.0,
                latest = self.latest,
                "Discarding stale events response"
            );
            return false;
        }

        match result {
            Ok(events) => {
                info!(count = events.len(), url = %self.url, "Loaded events");
                self.events = events;
                self.error = None;
            }
            Err(e) => {
                error!(url = %self.url, error = %e, "Failed to fetch events");
                self.error = Some(e);
            }
        }
        self.is_loading = false;
        true
    }

    /// Issue one read and apply it.
    pub async fn activate<F: EventFetcher>(&mut self, fetcher: &F) {
        let token = self.begin();
        let result = fetcher.fetch(&self.url).await;
        self.complete(token, result);
    }

    /// Point the source at a new URL, re-activating if it changed.
    pub async fn set_url<F: EventFetcher>(&mut self, url: impl Into<String>, fetcher: &F) {
        let url = url.into();
        if url == self.url {
            return;
        }
        self.url = url;
        self.activate(fetcher).await;
    }
}
