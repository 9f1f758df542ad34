/*
[INPUT]:  HTTP verb, path template, path/query parameters, optional JSON body
[OUTPUT]: Decoded typed response or GeckoError
[POS]:    HTTP layer - single dispatch path shared by every endpoint
[UPDATE]: When changing retry policy, URL building or response handling
*/

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::client::ClientConfig;
use crate::http::params::{PathParams, QueryParams, render_segment};
use crate::http::{GeckoError, Result};

/// Header carrying the static API key
pub const API_KEY_HEADER: &str = "x-cg-pro-api-key";

/// Owns the pooled HTTP client and the immutable call policy.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Transport {
    http_client: Client,
    base_url: Url,
    retry_count: u32,
    retry_wait: Duration,
}

impl Transport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_builder(config, Client::builder())
    }

    /// Build on top of a caller-supplied builder (proxies, extra headers).
    ///
    /// Timeouts, user agent and the API key header from `config` are applied
    /// last and win over the builder's own settings.
    pub fn with_builder(config: &ClientConfig, builder: ClientBuilder) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(GeckoError::Config(format!(
                "base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        if let Some(api_key) = config.api_key.as_deref().filter(|key| !key.is_empty()) {
            let mut value = HeaderValue::from_str(api_key)
                .map_err(|_| GeckoError::Config("API key is not a valid header value".to_string()))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string());

        let http_client = builder
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            retry_count: config.retry_count,
            retry_wait: config.retry_wait,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET shortcut; every provider endpoint is read-only.
    pub async fn get<T: DeserializeOwned>(
        &self,
        template: &str,
        path_params: &PathParams<'_>,
        query: QueryParams,
    ) -> Result<T> {
        self.execute(Method::GET, template, path_params, query, None)
            .await
    }

    /// Issue one logical call, retrying failed attempts with a fixed wait.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        template: &str,
        path_params: &PathParams<'_>,
        query: QueryParams,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = self.build_url(template, path_params, &query)?;
        let mut attempt: u32 = 0;

        loop {
            debug!(%method, path = url.path(), attempt, "dispatching request");

            let outcome = self
                .send_once(method.clone(), url.clone(), body.as_ref())
                .await
                .and_then(|(status, text)| {
                    if status.as_u16() >= 300 {
                        Err(GeckoError::api_error(status, text))
                    } else {
                        Ok(text)
                    }
                });

            match outcome {
                Ok(text) => return decode_body(text),
                Err(err) if attempt < self.retry_count => {
                    attempt += 1;
                    debug!(
                        path = url.path(),
                        attempt,
                        status = ?err.status(),
                        wait_ms = self.retry_wait.as_millis() as u64,
                        "attempt failed, retrying"
                    );
                    tokio::time::sleep(self.retry_wait).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Resolve a template against the base URL.
    ///
    /// Each template segment is substituted and pushed as its own
    /// percent-encoded path segment, so a value containing `/` cannot
    /// escape its segment. Values of `.` or `..` are rejected since URL
    /// normalization would drop them.
    pub fn build_url(
        &self,
        template: &str,
        path_params: &PathParams<'_>,
        query: &QueryParams,
    ) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                GeckoError::Config(format!("base URL cannot carry a path: {}", self.base_url))
            })?;
            segments.pop_if_empty();
            for segment in template.split('/').filter(|segment| !segment.is_empty()) {
                let rendered = render_segment(segment, template, path_params)?;
                if rendered == "." || rendered == ".." {
                    return Err(GeckoError::DotPathSegment {
                        segment: rendered,
                        template: template.to_string(),
                    });
                }
                segments.push(&rendered);
            }
        }

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        Ok(url)
    }

    async fn send_once(
        &self,
        method: Method,
        url: Url,
        body: Option<&serde_json::Value>,
    ) -> Result<(StatusCode, String)> {
        let mut request = self.http_client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }
}

fn decode_body<T: DeserializeOwned>(text: String) -> Result<T> {
    serde_json::from_str(&text).map_err(|source| GeckoError::Decode { source, body: text })
}
