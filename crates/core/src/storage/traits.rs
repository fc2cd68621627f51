use async_trait::async_trait;

use crate::errors::DashboardError;
use crate::models::holding::Holding;

/// Trait abstraction for the durable snapshot store.
///
/// Persistence is a one-way export, not authoritative state: the in-memory
/// store keeps serving reads during a round-trip, and a failed `save`
/// must never mutate or roll back local state.
///
/// `save` has wholesale-replace semantics (delete-then-insert): the
/// durable snapshot after a successful save is exactly the rows passed in.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    /// Load the full durable snapshot.
    async fn load(&self) -> Result<Vec<Holding>, DashboardError>;

    /// Replace the durable snapshot with the given rows.
    async fn save(&self, rows: &[Holding]) -> Result<(), DashboardError>;
}
