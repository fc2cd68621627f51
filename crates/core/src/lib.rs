pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::collections::HashMap;

use errors::DashboardError;
use models::chart::{AllocationChart, CandlestickChart};
use models::edit::EditEvent;
use models::holding::{Holding, SeedPosition};
use models::series::PriceSeries;
use services::bus::ChangeBus;
use services::history_service::HistoryService;
use services::projections::ProjectionService;
use services::reconciler::EditReconciler;
use services::store::PortfolioStore;
use storage::traits::SnapshotStore;

/// Main entry point for the equity dashboard core.
///
/// Owns the portfolio store and every service that operates on it. All
/// mutation flows through `edit_cell` (single cells, reconciled) or
/// `reload` (wholesale); reads are snapshots; the two chart projections
/// are recomputed on demand and re-render via the change bus.
///
/// The price-series map is captured once at bootstrap and fixed for the
/// session — `price` on a holding is not reactively updated.
#[must_use]
pub struct Dashboard {
    store: PortfolioStore,
    reconciler: EditReconciler,
    projections: ProjectionService,
    bus: ChangeBus,
    history: HashMap<String, PriceSeries>,
    selection: Option<usize>,
    /// Fetch failure captured at bootstrap, surfaced once to the caller.
    fetch_error: Option<DashboardError>,
    /// Tracks whether any edit has occurred since the last save/reload.
    dirty: bool,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("rows", &self.store.len())
            .field("series", &self.history.len())
            .field("selection", &self.selection)
            .field("patches", &self.reconciler.patch_count())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Dashboard {
    /// Build a dashboard from explicit rows and a price-series map.
    pub fn new(rows: Vec<Holding>, history: HashMap<String, PriceSeries>) -> Self {
        Self {
            store: PortfolioStore::new(rows),
            reconciler: EditReconciler::new(),
            projections: ProjectionService::new(),
            bus: ChangeBus::new(),
            history,
            selection: None,
            fetch_error: None,
            dirty: false,
        }
    }

    /// Build the dashboard from a seed portfolio and a live history fetch.
    ///
    /// Each seed position becomes a holding priced at its series' last
    /// close. A ticker the provider cannot serve still gets a row (price
    /// and value zero) so the table renders; its candlestick chart
    /// degrades to empty. If the fetch fails outright the dashboard is
    /// still constructed, with the failure retrievable once via
    /// `take_fetch_error`.
    pub async fn bootstrap(seed: Vec<SeedPosition>, history: &mut HistoryService) -> Self {
        let tickers: Vec<String> = seed.iter().map(|p| p.ticker.clone()).collect();

        let (series_map, fetch_error) = match history.get_history(&tickers).await {
            Ok(map) => (map, None),
            Err(e) => (HashMap::new(), Some(e)),
        };

        let rows = seed
            .into_iter()
            .map(|position| {
                let price = series_map
                    .get(&position.ticker)
                    .and_then(|s| s.last_close())
                    .unwrap_or(0.0);
                Holding::new(
                    position.ticker,
                    position.company,
                    position.quantity,
                    price,
                    position.action,
                )
            })
            .collect();

        let mut dashboard = Self::new(rows, series_map);
        dashboard.fetch_error = fetch_error;
        dashboard
    }

    /// The startup fetch failure, if any. Returns it once and clears it,
    /// so the notification is shown a single time.
    pub fn take_fetch_error(&mut self) -> Option<DashboardError> {
        self.fetch_error.take()
    }

    // ── Reads ───────────────────────────────────────────────────────

    /// An immutable copy of all holdings at this point in time.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Holding> {
        self.store.snapshot()
    }

    #[must_use]
    pub fn rows(&self) -> &[Holding] {
        self.store.rows()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.store.len()
    }

    /// The session-fixed price series for a ticker, if one was fetched.
    #[must_use]
    pub fn price_series(&self, ticker: &str) -> Option<&PriceSeries> {
        self.history.get(&ticker.to_uppercase())
    }

    /// Count of accepted edits since startup. Increments by exactly one
    /// per reconciled edit and by zero per rejected edit.
    #[must_use]
    pub fn patch_count(&self) -> u64 {
        self.reconciler.patch_count()
    }

    /// Returns `true` if any edit occurred since the last save or reload.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Edits ───────────────────────────────────────────────────────

    /// Apply a single-cell edit — the only sanctioned mutation path.
    ///
    /// On success the patch counter advances and `store_changed` is
    /// published exactly once. On rejection the store is untouched and
    /// nothing is published.
    pub fn edit_cell(&mut self, edit: EditEvent) -> Result<u64, DashboardError> {
        let patch = self.reconciler.apply(&mut self.store, &edit)?;
        self.dirty = true;
        self.bus.publish_store_changed(patch);
        Ok(patch)
    }

    // ── Selection ───────────────────────────────────────────────────

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Change which row drives the candlestick chart. Publishes
    /// `selection_changed` only when the selection actually changes.
    pub fn set_selection(&mut self, selection: Option<usize>) {
        if self.selection != selection {
            self.selection = selection;
            self.bus.publish_selection_changed(selection);
        }
    }

    // ── Subscriptions ───────────────────────────────────────────────

    /// Subscribe to selection changes (drives the candlestick view).
    pub fn on_selection_changed(&mut self, subscriber: impl FnMut(Option<usize>) + 'static) {
        self.bus.on_selection_changed(subscriber);
    }

    /// Subscribe to store changes (drives the allocation view).
    pub fn on_store_changed(&mut self, subscriber: impl FnMut(u64) + 'static) {
        self.bus.on_store_changed(subscriber);
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Candlestick chart for the current selection (fallback: AAPL).
    #[must_use]
    pub fn candlestick_chart(&self) -> CandlestickChart {
        self.projections
            .candlestick(self.selection, self.store.rows(), &self.history)
    }

    /// Allocation chart over the whole store.
    #[must_use]
    pub fn allocation_chart(&self) -> AllocationChart {
        self.projections.allocation(self.store.rows())
    }

    // ── Persistence ─────────────────────────────────────────────────

    /// Export the current snapshot to the durable store (explicit user
    /// action only). A failure is returned as-is; local state is never
    /// rolled back or mutated by a failed save, and retry is left to the
    /// user.
    pub async fn save(&mut self, store: &dyn SnapshotStore) -> Result<(), DashboardError> {
        let snapshot = self.store.snapshot();
        store.save(&snapshot).await?;
        self.dirty = false;
        Ok(())
    }

    /// Replace the whole table from the durable store. Publishes
    /// `store_changed` (with the unchanged patch counter) so allocation
    /// views refresh; a reload is not an edit, so the counter stays put.
    pub async fn reload(&mut self, store: &dyn SnapshotStore) -> Result<(), DashboardError> {
        let rows = store.load().await?;
        self.store.replace_all(rows);
        self.dirty = false;
        self.bus.publish_store_changed(self.reconciler.patch_count());
        Ok(())
    }
}
