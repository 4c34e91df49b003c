//! REST implementation of [`ScheduleService`].
//!
//! `RestScheduleClient` wraps a `reqwest::Client` and translates the two
//! trait methods into HTTP calls against the schedule service, with
//! automatic retry + exponential back-off on transient (5xx / timeout)
//! failures. The editor above it still sees at most one logical call per
//! submit.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use uuid::Uuid;

use sr_domain::config::ClientConfig;
use sr_domain::error::{Error, Result};
use sr_domain::schedule::{ScheduleFields, ScheduleRecord};
use sr_editor::ScheduleService;

use crate::types::{SchedulePayload, ScheduleResponse};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Client
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A REST-based client for the schedule service.
///
/// Created once and shared for the lifetime of the application; the
/// underlying `reqwest::Client` maintains a connection pool.
#[derive(Debug, Clone)]
pub struct RestScheduleClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    max_retries: u32,
}

impl RestScheduleClient {
    /// Build a new client from the shared [`ClientConfig`].
    pub fn new(cfg: &ClientConfig) -> Result<Self> {
        if cfg.base_url.is_empty() {
            return Err(Error::Config("schedule service base_url is empty".into()));
        }
        let http = Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_owned(),
            api_key: cfg.api_key.clone(),
            max_retries: cfg.max_retries,
        })
    }

    // ── request helpers ──────────────────────────────────────────────

    /// Decorate a `RequestBuilder` with the standard client headers.
    fn decorate(&self, rb: RequestBuilder) -> RequestBuilder {
        let trace_id = Uuid::new_v4().to_string();
        let mut rb = rb
            .header("X-Client-Type", "studyremind-editor")
            .header("X-Trace-Id", &trace_id);

        if let Some(ref key) = self.api_key {
            rb = rb.header("X-Api-Key", key);
        }
        rb
    }

    /// Build the full URL for a path like `/api/schedules`.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ── retry engine ─────────────────────────────────────────────────

    /// Execute a request with retry + exponential back-off on transient
    /// errors.
    ///
    /// * Retries on 5xx status codes and on timeouts.
    /// * Does **not** retry on 4xx (client errors are permanent).
    async fn execute_with_retry(
        &self,
        endpoint: &str,
        build_request: impl Fn() -> RequestBuilder,
    ) -> Result<Response> {
        let mut last_err: Option<Error> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let backoff = Duration::from_millis(100 * 2u64.pow(attempt - 1));
                tokio::time::sleep(backoff).await;
            }

            let start = Instant::now();
            let rb = self.decorate(build_request());
            let result = rb.send().await;
            let duration_ms = start.elapsed().as_millis() as u64;

            match result {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    tracing::debug!(endpoint, status, duration_ms, "schedule service call");

                    if resp.status().is_server_error() {
                        // 5xx — transient, retry
                        let body = resp.text().await.unwrap_or_default();
                        last_err = Some(Error::Service {
                            status,
                            message: format!("{endpoint}: {body}"),
                        });
                        continue;
                    }

                    if resp.status().is_client_error() {
                        // 4xx — permanent, do NOT retry
                        let resp_status = resp.status();
                        let body = resp.text().await.unwrap_or_default();
                        if resp_status == StatusCode::UNAUTHORIZED
                            || resp_status == StatusCode::FORBIDDEN
                        {
                            return Err(Error::Auth(format!(
                                "{endpoint} auth failed ({status}): {body}"
                            )));
                        }
                        return Err(Error::Service {
                            status,
                            message: format!("{endpoint}: {body}"),
                        });
                    }

                    return Ok(resp);
                }
                Err(e) => {
                    tracing::debug!(endpoint, duration_ms, error = %e, "schedule service call failed");
                    last_err = Some(from_reqwest(e));
                    // Timeouts and connection errors are transient — retry
                    continue;
                }
            }
        }

        Err(last_err
            .unwrap_or_else(|| Error::Http(format!("{endpoint}: all retries exhausted"))))
    }

    /// Read a response body and parse it into a [`ScheduleRecord`].
    async fn parse_record(endpoint: &str, resp: Response) -> Result<ScheduleRecord> {
        let body = resp.text().await.map_err(from_reqwest)?;
        let parsed: ScheduleResponse = serde_json::from_str(&body).map_err(|e| {
            Error::Other(format!("failed to parse {endpoint} response: {e}: {body}"))
        })?;
        Ok(parsed.into())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Trait implementation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[async_trait]
impl ScheduleService for RestScheduleClient {
    async fn create(&self, fields: ScheduleFields) -> Result<ScheduleRecord> {
        let url = self.url("/api/schedules");
        let payload = SchedulePayload::from(fields);
        let resp = self
            .execute_with_retry("POST /api/schedules", || {
                self.http.post(&url).json(&payload)
            })
            .await?;

        Self::parse_record("POST /api/schedules", resp).await
    }

    async fn update(&self, id: Uuid, fields: ScheduleFields) -> Result<ScheduleRecord> {
        let url = self.url(&format!("/api/schedules/{id}"));
        let endpoint = format!("PUT /api/schedules/{id}");
        let payload = SchedulePayload::from(fields);
        let resp = self
            .execute_with_retry(&endpoint, || self.http.put(&url).json(&payload))
            .await?;

        Self::parse_record(&endpoint, resp).await
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Error conversion helper
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Convert a `reqwest::Error` into a domain `Error`.
///
/// Timeout errors become `Error::Timeout`; everything else becomes
/// `Error::Http`.
pub fn from_reqwest(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else {
        Error::Http(e.to_string())
    }
}
