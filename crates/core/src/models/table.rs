use super::edit::Column;
use super::holding::NOTES_MAX_LEN;

/// Horizontal alignment hint for a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
    Center,
}

/// How a cell's raw value should be formatted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Text,
    Integer,
    /// Money with `.` decimal separator, `,` thousands separator,
    /// and the given number of decimal places.
    Money { precision: u8 },
}

/// Presentation configuration for one table column.
///
/// Pure data consumed by whatever rendering layer is chosen; the core
/// never interprets it. Editability here mirrors `Column::is_editable`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub column: Column,
    pub title: &'static str,
    pub editable: bool,
    pub frozen: bool,
    pub align: TextAlign,
    pub format: CellFormat,
    /// Fixed pixel width, if any
    pub width: Option<u16>,
    /// Maximum input length for text editors, if any
    pub max_len: Option<usize>,
}

/// Column layout of the holdings table, in display order.
pub const TABLE_COLUMNS: [ColumnSpec; 7] = [
    ColumnSpec {
        column: Column::Ticker,
        title: "Stock Ticker",
        editable: false,
        frozen: true,
        align: TextAlign::Left,
        format: CellFormat::Text,
        width: None,
        max_len: None,
    },
    ColumnSpec {
        column: Column::Company,
        title: "Company",
        editable: false,
        frozen: true,
        align: TextAlign::Left,
        format: CellFormat::Text,
        width: None,
        max_len: None,
    },
    ColumnSpec {
        column: Column::Quantity,
        title: "Shares",
        editable: true,
        frozen: false,
        align: TextAlign::Left,
        format: CellFormat::Integer,
        width: None,
        max_len: None,
    },
    ColumnSpec {
        column: Column::Price,
        title: "Last Close Price",
        editable: false,
        frozen: false,
        align: TextAlign::Right,
        format: CellFormat::Money { precision: 2 },
        width: None,
        max_len: None,
    },
    ColumnSpec {
        column: Column::Value,
        title: "Market Value",
        editable: false,
        frozen: false,
        align: TextAlign::Right,
        format: CellFormat::Money { precision: 0 },
        width: None,
        max_len: None,
    },
    ColumnSpec {
        column: Column::Action,
        title: "Action",
        editable: true,
        frozen: false,
        align: TextAlign::Center,
        format: CellFormat::Text,
        width: None,
        max_len: None,
    },
    ColumnSpec {
        column: Column::Notes,
        title: "Notes",
        editable: true,
        frozen: false,
        align: TextAlign::Left,
        format: CellFormat::Text,
        width: Some(400),
        max_len: Some(NOTES_MAX_LEN),
    },
];

/// Look up the presentation spec for a column.
pub fn column_spec(column: Column) -> &'static ColumnSpec {
    TABLE_COLUMNS
        .iter()
        .find(|spec| spec.column == column)
        .expect("every column has a spec")
}
