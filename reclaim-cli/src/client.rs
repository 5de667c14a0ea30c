//! HTTP client wrapper for the registry API.

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

/// Header carrying the caller's principal id.
const CALLER_HEADER: &str = "x-caller-id";

pub struct ApiClient {
    http: Client,
    base_url: String,
    caller: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, caller: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            caller,
        })
    }

    fn caller(&self) -> Result<&str> {
        self.caller.as_deref().ok_or_else(|| {
            anyhow!("caller identity required: pass --caller or set RECLAIM_CALLER")
        })
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach registry at {url}"))?;
        Self::handle(response).await
    }

    /// POST `body` to `path`; attaches the caller header when `with_caller`.
    pub async fn post(&self, path: &str, body: &Value, with_caller: bool) -> Result<Value> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "POST");

        let mut request = self.http.post(&url).json(body);
        if with_caller {
            request = request.header(CALLER_HEADER, self.caller()?);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to reach registry at {url}"))?;
        Self::handle(response).await
    }

    /// Decode a response, surfacing the server's `{error, code}` payload on
    /// rejection. Empty bodies (e.g. the scan's 202) decode to null.
    async fn handle(response: Response) -> Result<Value> {
        let status = response.status();
        let text = response
            .text()
            .await
            .context("Failed to read response body")?;

        let body: Value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid JSON response ({status})"))?
        };

        if status.is_success() {
            return Ok(body);
        }

        let message = body["error"].as_str().unwrap_or("unknown error");
        let code = body["code"].as_str().unwrap_or("UNKNOWN");
        bail!("{status}: {message} [{code}]");
    }
}
