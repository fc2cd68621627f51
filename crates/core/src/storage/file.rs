use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::traits::SnapshotStore;
use crate::errors::DashboardError;
use crate::models::holding::Holding;

/// Durable snapshot store backed by a pretty-printed JSON file.
///
/// Stands in for the document database: `save` truncates and rewrites the
/// whole file (wholesale replace), `load` on a missing file yields an
/// empty snapshot so a fresh deployment starts clean.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotStore for JsonSnapshotStore {
    fn name(&self) -> &str {
        "JSON file"
    }

    async fn load(&self) -> Result<Vec<Holding>, DashboardError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = std::fs::read(&self.path)?;
        let rows: Vec<Holding> = serde_json::from_slice(&bytes).map_err(|e| {
            DashboardError::Deserialization(format!(
                "Failed to parse snapshot {}: {e}",
                self.path.display()
            ))
        })?;
        Ok(rows)
    }

    async fn save(&self, rows: &[Holding]) -> Result<(), DashboardError> {
        let json = serde_json::to_vec_pretty(rows).map_err(|e| {
            DashboardError::Serialization(format!("Failed to serialize snapshot: {e}"))
        })?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
