//! # Availability Client
//!
//! [`AvailabilityStore`] over the availability REST API, so an
//! [`EditorSession`](availability_core::session::EditorSession) can run in a
//! headless host (CLI, batch import) against a remote server.

pub mod config;

use std::time::Duration;

use async_trait::async_trait;
use availability_core::{
    errors::{AvailabilityError, AvailabilityResult},
    models::{
        availability::{AvailabilityResponse, ChangeSet, SubmitResult},
        time_slot::TimeSlot,
    },
    store::AvailabilityStore,
    working_hours::WorkingHours,
};
use eyre::WrapErr;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::config::ClientConfig;

#[derive(Debug, Clone)]
pub struct HttpAvailabilityStore {
    client: Client,
    base_url: String,
}

impl HttpAvailabilityStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> AvailabilityResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Working-hours window the server validates additions against.
    pub async fn working_hours(&self) -> AvailabilityResult<WorkingHours> {
        let url = format!("{}/api/availability/working-hours", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .wrap_err_with(|| format!("Failed to reach {}", url))?;

        decode(response).await
    }

    fn availability_url(&self, professor_id: Uuid) -> String {
        format!("{}/api/professors/{}/availability", self.base_url, professor_id)
    }
}

#[async_trait]
impl AvailabilityStore for HttpAvailabilityStore {
    async fn fetch_baseline(&self, professor_id: Uuid) -> AvailabilityResult<Vec<TimeSlot>> {
        let url = self.availability_url(professor_id);
        debug!("Fetching availability baseline from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .wrap_err_with(|| format!("Failed to reach {}", url))?;

        let body: AvailabilityResponse = decode(response).await?;
        Ok(body.slots)
    }

    async fn submit_change_set(
        &self,
        professor_id: Uuid,
        change_set: &ChangeSet,
    ) -> AvailabilityResult<SubmitResult> {
        let url = self.availability_url(professor_id);
        debug!(
            "Submitting change set to {}: add={}, remove={}",
            url,
            change_set.add.len(),
            change_set.remove.len()
        );

        let response = self
            .client
            .post(&url)
            .json(change_set)
            .send()
            .await
            .wrap_err_with(|| format!("Failed to reach {}", url))?;

        decode(response).await
    }
}

/// Decodes a success body, or maps the API's `{"error": ...}` body back to
/// the matching error kind.
async fn decode<T: DeserializeOwned>(response: Response) -> AvailabilityResult<T> {
    let status = response.status();
    if status.is_success() {
        let body = response
            .json::<T>()
            .await
            .wrap_err("Failed to decode availability API response")?;
        return Ok(body);
    }

    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| status.to_string());

    Err(error_for_status(status, message))
}

fn error_for_status(status: StatusCode, message: String) -> AvailabilityError {
    match status {
        StatusCode::NOT_FOUND => AvailabilityError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            AvailabilityError::Validation(message)
        }
        _ => AvailabilityError::Store(eyre::eyre!("{} ({})", message, status)),
    }
}
