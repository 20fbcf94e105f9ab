// src/core/net.rs
// Source retrieval. One blocking GET per call, no retries; callers decide
// what a failure means.

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// Anything that can turn a source location into text.
pub trait Fetch {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError>;

    fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        let text = self.fetch_text(url)?;
        serde_json::from_str(&text).map_err(|source| FetchError::Json { url: s!(url), source })
    }
}

/// `http(s)://` through reqwest; anything else is read from disk
/// (`file://` prefix optional).
pub struct SourceFetcher {
    client: reqwest::blocking::Client,
}

impl SourceFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| FetchError::Transport { url: s!("<client>"), source })?;
        Ok(Self { client })
    }
}

impl Fetch for SourceFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        if !is_remote(url) {
            let path = PathBuf::from(url.strip_prefix("file://").unwrap_or(url));
            return std::fs::read_to_string(&path).map_err(|source| FetchError::Io { path, source });
        }

        tracing::debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(|source| FetchError::Transport { url: s!(url), source })
    }
}

fn is_remote(url: &str) -> bool {
    let lc = url.trim_start().to_ascii_lowercase();
    lc.starts_with("http://") || lc.starts_with("https://")
}

/// In-memory sources keyed by URL. Unknown URLs fail like a missing page.
#[derive(Default)]
pub struct MapFetcher {
    pages: HashMap<String, String>,
}

impl MapFetcher {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }
}

impl Fetch for MapFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.pages.get(url).cloned().ok_or_else(|| FetchError::Missing(s!(url)))
    }
}
