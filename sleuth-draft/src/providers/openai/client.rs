//! Rate-limited HTTP client for the completions API.
//!
//! One outbound concern: POST a JSON body, decode a JSON body back,
//! without tripping the upstream per-minute quota. A semaphore bounds
//! in-flight calls and a minimum inter-dispatch gap spreads them out;
//! 429 responses carry the upstream Retry-After through to the caller.

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sleuth_core::SleuthResult;
use tokio::sync::{Mutex, Semaphore};

use super::types::ApiError;
use crate::providers::{invalid_response, rate_limited, request_failed};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Completions-API client with client-side rate limiting.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    in_flight: Semaphore,
    last_dispatch: Mutex<Option<Instant>>,
    min_gap: Duration,
}

impl OpenAiClient {
    /// A client that paces calls so at most `requests_per_minute` leave the
    /// process.
    pub fn new(api_key: SecretString, requests_per_minute: u32) -> Self {
        let rpm = requests_per_minute.max(1);
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
            in_flight: Semaphore::new(rpm as usize),
            last_dispatch: Mutex::new(None),
            min_gap: Duration::from_millis((60_000 / u64::from(rpm)).max(10)),
        }
    }

    /// POST `body` to `endpoint` and decode the JSON response.
    pub async fn request<Req: Serialize, Res: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &Req,
    ) -> SleuthResult<Res> {
        let _permit = self
            .in_flight
            .acquire()
            .await
            .map_err(|e| request_failed("openai", 0, format!("rate limiter closed: {e}")))?;
        self.pace().await;

        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .http
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|e| request_failed("openai", 0, format!("request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| invalid_response("openai", format!("undecodable body: {e}")));
        }

        let retry_after = retry_after_ms(response.headers());
        let detail = match response.text().await {
            // The upstream error body nests the useful text; fall back to
            // the raw body when it is not the documented shape.
            Ok(text) => match serde_json::from_str::<ApiError>(&text) {
                Ok(parsed) => parsed.error.message,
                Err(_) => text,
            },
            Err(_) => "unreadable error body".to_string(),
        };

        Err(if status == StatusCode::TOO_MANY_REQUESTS {
            rate_limited("openai", retry_after.unwrap_or(0))
        } else {
            request_failed("openai", i32::from(status.as_u16()), detail)
        })
    }

    /// Hold the call until the minimum gap since the previous dispatch has
    /// passed. Holding the lock across the sleep serializes dispatches.
    async fn pace(&self) {
        let mut last = self.last_dispatch.lock().await;
        if let Some(previous) = *last {
            let since = previous.elapsed();
            if since < self.min_gap {
                tokio::time::sleep(self.min_gap - since).await;
            }
        }
        *last = Some(Instant::now());
    }
}

fn retry_after_ms(headers: &reqwest::header::HeaderMap) -> Option<i64> {
    let seconds = headers
        .get("retry-after")?
        .to_str()
        .ok()?
        .parse::<f64>()
        .ok()?;
    Some((seconds * 1000.0) as i64)
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
