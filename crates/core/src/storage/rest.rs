use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::traits::SnapshotStore;
use crate::errors::DashboardError;
use crate::models::holding::Holding;

/// Durable snapshot store behind the REST layer.
///
/// - `load` → `GET {base}/get_data`, a record-oriented JSON array.
/// - `save` → `POST {base}/update_data` with the full array; the server
///   replaces its collection wholesale and answers
///   `{"status": "success"}`.
///
/// Any transport failure or non-success reply maps to `Persistence`;
/// the caller's in-memory state is never touched by a failed round-trip.
pub struct RestSnapshotStore {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct StatusReply {
    status: String,
}

impl RestSnapshotStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SnapshotStore for RestSnapshotStore {
    fn name(&self) -> &str {
        "REST"
    }

    async fn load(&self) -> Result<Vec<Holding>, DashboardError> {
        let url = format!("{}/get_data", self.base_url);

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(DashboardError::Persistence(format!(
                "GET /get_data returned {}",
                resp.status()
            )));
        }

        let rows: Vec<Holding> = resp.json().await.map_err(|e| {
            DashboardError::Persistence(format!("Failed to parse /get_data response: {e}"))
        })?;
        Ok(rows)
    }

    async fn save(&self, rows: &[Holding]) -> Result<(), DashboardError> {
        let url = format!("{}/update_data", self.base_url);

        let resp = self.client.post(&url).json(rows).send().await?;
        if !resp.status().is_success() {
            return Err(DashboardError::Persistence(format!(
                "POST /update_data returned {}",
                resp.status()
            )));
        }

        let reply: StatusReply = resp.json().await.map_err(|e| {
            DashboardError::Persistence(format!("Failed to parse /update_data response: {e}"))
        })?;
        if reply.status != "success" {
            return Err(DashboardError::Persistence(format!(
                "Save rejected with status '{}'",
                reply.status
            )));
        }

        Ok(())
    }
}
