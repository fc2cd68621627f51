use serde::{Deserialize, Serialize};

/// A column of the holdings table.
///
/// Only `quantity`, `action`, and `notes` accept user edits; the rest are
/// system-derived and rejected at the store boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Ticker,
    Company,
    Quantity,
    Price,
    Value,
    Action,
    Notes,
}

impl Column {
    /// Parse the wire/UI column name. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ticker" => Some(Column::Ticker),
            "company" => Some(Column::Company),
            "quantity" => Some(Column::Quantity),
            "price" => Some(Column::Price),
            "value" => Some(Column::Value),
            "action" => Some(Column::Action),
            "notes" => Some(Column::Notes),
            _ => None,
        }
    }

    /// Whether this column accepts user edits.
    pub fn is_editable(&self) -> bool {
        matches!(self, Column::Quantity | Column::Action | Column::Notes)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Ticker => "ticker",
            Column::Company => "company",
            Column::Quantity => "quantity",
            Column::Price => "price",
            Column::Value => "value",
            Column::Action => "action",
            Column::Notes => "notes",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw cell value as it arrives from the edit boundary.
/// The reconciler checks it against the target column's constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }
}

/// A single-cell mutation request: (row, column, new value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditEvent {
    pub row: usize,
    pub column: Column,
    pub value: CellValue,
}

impl EditEvent {
    pub fn new(row: usize, column: Column, value: CellValue) -> Self {
        Self { row, column, value }
    }
}
