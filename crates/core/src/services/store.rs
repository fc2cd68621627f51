use crate::errors::DashboardError;
use crate::models::edit::{CellValue, Column};
use crate::models::holding::{Action, Holding, NOTES_MAX_LEN};

/// The canonical mutable table of holdings.
///
/// All mutation goes through `apply` (single cells, via the reconciler)
/// or `replace_all` (wholesale, on explicit reload). Reads go through
/// `snapshot`/`rows`, so no caller can observe a half-applied edit:
/// a quantity edit recomputes `value` inside the same `apply` call.
pub struct PortfolioStore {
    rows: Vec<Holding>,
}

impl PortfolioStore {
    /// Build a store from initial rows, re-deriving every `value` so the
    /// `value == quantity * price` invariant holds regardless of input.
    pub fn new(mut rows: Vec<Holding>) -> Self {
        for row in &mut rows {
            row.recompute_value();
        }
        Self { rows }
    }

    /// An immutable copy of all rows at this point in time.
    pub fn snapshot(&self) -> Vec<Holding> {
        self.rows.clone()
    }

    pub fn rows(&self) -> &[Holding] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Holding> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mutate one cell. Last write wins for repeated edits to the same cell.
    ///
    /// System-derived columns (`ticker`, `company`, `price`, `value`) are
    /// rejected here with `ImmutableField` — this boundary holds even if a
    /// caller bypasses the reconciler. Editing `quantity` recomputes
    /// `value` as part of the same operation.
    pub fn apply(
        &mut self,
        row_index: usize,
        column: Column,
        value: &CellValue,
    ) -> Result<(), DashboardError> {
        if !column.is_editable() {
            return Err(DashboardError::ImmutableField(column));
        }

        let row = self
            .rows
            .get_mut(row_index)
            .ok_or(DashboardError::RowNotFound(row_index))?;

        match column {
            Column::Quantity => {
                let quantity = match value {
                    CellValue::Integer(n) if *n >= 0 => *n as u64,
                    CellValue::Integer(n) => {
                        return Err(DashboardError::Validation(format!(
                            "quantity must be a non-negative integer, got {n}"
                        )));
                    }
                    CellValue::Text(_) => {
                        return Err(DashboardError::Validation(
                            "quantity must be a non-negative integer".into(),
                        ));
                    }
                };
                row.quantity = quantity;
                row.recompute_value();
            }
            Column::Action => {
                let action = match value {
                    CellValue::Text(s) => Action::parse(s).ok_or_else(|| {
                        DashboardError::Validation(format!(
                            "action must be one of buy/sell/hold, got '{s}'"
                        ))
                    })?,
                    CellValue::Integer(_) => {
                        return Err(DashboardError::Validation(
                            "action must be one of buy/sell/hold".into(),
                        ));
                    }
                };
                row.action = action;
            }
            Column::Notes => {
                let notes = match value {
                    CellValue::Text(s) => s,
                    CellValue::Integer(_) => {
                        return Err(DashboardError::Validation("notes must be text".into()));
                    }
                };
                if notes.chars().count() > NOTES_MAX_LEN {
                    return Err(DashboardError::Validation(format!(
                        "notes exceed {NOTES_MAX_LEN} characters"
                    )));
                }
                row.notes = notes.clone();
            }
            // is_editable() filtered these out above
            Column::Ticker | Column::Company | Column::Price | Column::Value => unreachable!(),
        }

        Ok(())
    }

    /// Replace the entire table (explicit reload from the durable store).
    /// Values are re-derived so a snapshot saved by an older version, or
    /// edited out-of-band, cannot smuggle in a broken invariant.
    pub fn replace_all(&mut self, rows: Vec<Holding>) {
        self.rows = rows;
        for row in &mut self.rows {
            row.recompute_value();
        }
    }
}
