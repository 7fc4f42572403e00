//! Shared request executor: one authenticated HTTP call plus retry policy.
//!
//! Every resource proxy funnels through [`Transport::execute`]. The
//! executor attaches bearer auth, applies the per-attempt timeout, and
//! retries 429/5xx/transport failures with capped exponential backoff.
//! It is the only place HTTP failures become [`Error`] values.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::error::Error;

/// Backoff cap between attempts.
const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// Delay before retry `attempt` (0-based): `min(2^attempt, 10)` seconds.
pub fn backoff_delay(attempt: u32) -> Duration {
    // 2^4 already exceeds the cap; clamp the shift so large attempt
    // counts can't overflow.
    let exp = Duration::from_secs(1u64 << attempt.min(4));
    exp.min(MAX_BACKOFF)
}

/// HTTP transport shared by all resource proxies.
///
/// Wraps `reqwest::Client`; holds no mutable state, so one instance
/// serves any number of concurrent calls.
#[derive(Debug)]
pub(crate) struct Transport {
    http: reqwest::Client,
    config: Config,
}

impl Transport {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(config.timeout)
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .expect("failed to build HTTP client"),
            config,
        }
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        self.execute(Method::GET, path, query, None).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, Error> {
        self.execute(Method::POST, path, &[], body).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<T, Error> {
        self.execute(Method::PUT, path, &[], Some(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.execute(Method::DELETE, path, &[], None).await
    }

    /// Perform one API call, retrying transient failures.
    ///
    /// Retries are sequential and bounded by `config.max_retries`
    /// additional attempts; the delay before retry `n` is
    /// [`backoff_delay(n)`](backoff_delay).
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<T, Error> {
        let url = format!("{}{}", self.config.base_url, path);
        let mut attempt: u32 = 0;

        loop {
            tracing::debug!(%method, %url, attempt, "sending request");
            match self.attempt(&method, &url, query, body.as_ref()).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    let delay = backoff_delay(attempt);
                    tracing::warn!(
                        %method,
                        %url,
                        attempt,
                        delay_secs = delay.as_secs(),
                        error = %err,
                        "transient failure, backing off before retry"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// One attempt: send, classify non-2xx, deserialize 2xx.
    async fn attempt<T: DeserializeOwned>(
        &self,
        method: &Method,
        url: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T, Error> {
        let mut request = self
            .http
            .request(method.clone(), url)
            .bearer_auth(&self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(
                reqwest::header::USER_AGENT,
                concat!("centavo-rust/", env!("CARGO_PKG_VERSION")),
            );

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout
            } else {
                Error::Network(format!("request failed: {e}"))
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout
            } else {
                Error::Network(format!("failed to read response body: {e}"))
            }
        })?;

        if !status.is_success() {
            return Err(Error::from_response(status.as_u16(), &text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}
