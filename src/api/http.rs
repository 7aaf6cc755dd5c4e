//! reqwest-backed implementation of [`TranslationApi`].

use super::{check_api_error, TranslationApi};
use crate::document::parse_body;
use crate::error::{Result, WtiError};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

/// Service host used when no `--api-url` is given
pub const DEFAULT_API_URL: &str = "https://webtranslateit.com";

const USER_AGENT: &str = concat!("wti-sync/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one project's API key.
pub struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    /// Create a client for `api_key` against the service at `api_url`.
    pub fn new(api_url: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| WtiError::Remote(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base: project_base(api_url, api_key),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn project_base(api_url: &str, api_key: &str) -> String {
    format!("{}/api/projects/{}", api_url.trim_end_matches('/'), api_key)
}

/// Parse the body, then apply the error-key and HTTP status checks.
async fn read_response(response: Response) -> Result<Value> {
    let status = response.status();
    let text = response.text().await?;
    let body = parse_body(&text).map_err(|e| {
        WtiError::Remote(format!("invalid JSON response (HTTP {}): {}", status, e))
    })?;

    check_api_error(&body)?;
    if !status.is_success() {
        return Err(WtiError::Remote(format!("HTTP {}", status)));
    }
    Ok(body)
}

#[async_trait]
impl TranslationApi for HttpApi {
    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        debug!(%path, "GET");
        let response = self.client.get(&url).send().await?;
        read_response(response).await
    }

    async fn put_file(&self, path: &str, file_name: &str, content: Vec<u8>) -> Result<Value> {
        let url = self.url(path);
        debug!(%path, bytes = content.len(), "PUT");
        let part = Part::bytes(content).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let response = self.client.put(&url).multipart(form).send().await?;
        read_response(response).await
    }
}
