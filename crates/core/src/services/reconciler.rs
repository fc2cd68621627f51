use crate::errors::DashboardError;
use crate::models::edit::{CellValue, Column, EditEvent};
use crate::models::holding::{Action, NOTES_MAX_LEN};
use crate::services::store::PortfolioStore;

/// Where the reconciler is in its edit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Applying,
}

/// Validates incoming cell edits and applies them atomically to the store.
///
/// The `Idle`/`Applying` state machine guards against reentrancy: an edit
/// handler that triggers another edit before the first completes is
/// rejected with `EditInProgress` rather than interleaved. The patch
/// counter increments exactly once per accepted edit and never for a
/// rejected one — it is the sole re-render trigger for the allocation
/// projection.
pub struct EditReconciler {
    state: State,
    patches: u64,
}

impl EditReconciler {
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            patches: 0,
        }
    }

    /// Monotonically increasing count of accepted edits.
    pub fn patch_count(&self) -> u64 {
        self.patches
    }

    /// Whether the reconciler is between edits.
    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    /// Validate and apply a single edit.
    ///
    /// On success, returns the new patch count. On any failure the store
    /// is untouched, the counter is unchanged, and the state machine is
    /// back at `Idle`.
    pub fn apply(
        &mut self,
        store: &mut PortfolioStore,
        edit: &EditEvent,
    ) -> Result<u64, DashboardError> {
        if self.state == State::Applying {
            return Err(DashboardError::EditInProgress);
        }

        // Validate before touching anything: a rejected edit must leave
        // no trace (no partial apply, no counter bump).
        Self::validate(edit)?;

        self.state = State::Applying;
        let result = store.apply(edit.row, edit.column, &edit.value);
        self.state = State::Idle;

        result?;
        self.patches += 1;
        Ok(self.patches)
    }

    /// Column-specific constraint checks, independent of store state.
    fn validate(edit: &EditEvent) -> Result<(), DashboardError> {
        if !edit.column.is_editable() {
            return Err(DashboardError::InvalidColumn(edit.column.to_string()));
        }

        match edit.column {
            Column::Quantity => match &edit.value {
                CellValue::Integer(n) if *n >= 0 => Ok(()),
                CellValue::Integer(n) => Err(DashboardError::Validation(format!(
                    "quantity must be a non-negative integer, got {n}"
                ))),
                CellValue::Text(_) => Err(DashboardError::Validation(
                    "quantity must be a non-negative integer".into(),
                )),
            },
            Column::Action => match &edit.value {
                CellValue::Text(s) if Action::parse(s).is_some() => Ok(()),
                CellValue::Text(s) => Err(DashboardError::Validation(format!(
                    "action must be one of buy/sell/hold, got '{s}'"
                ))),
                CellValue::Integer(_) => Err(DashboardError::Validation(
                    "action must be one of buy/sell/hold".into(),
                )),
            },
            Column::Notes => match &edit.value {
                CellValue::Text(s) if s.chars().count() <= NOTES_MAX_LEN => Ok(()),
                CellValue::Text(_) => Err(DashboardError::Validation(format!(
                    "notes exceed {NOTES_MAX_LEN} characters"
                ))),
                CellValue::Integer(_) => {
                    Err(DashboardError::Validation("notes must be text".into()))
                }
            },
            _ => unreachable!("is_editable filtered non-editable columns"),
        }
    }
}

impl Default for EditReconciler {
    fn default() -> Self {
        Self::new()
    }
}
