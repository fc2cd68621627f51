use serde::{Deserialize, Serialize};

/// Maximum length of the free-text notes column.
pub const NOTES_MAX_LEN: usize = 100;

/// The trading intention recorded against a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl Action {
    /// Parse the wire/UI spelling ("buy", "sell", "hold").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "buy" => Some(Action::Buy),
            "sell" => Some(Action::Sell),
            "hold" => Some(Action::Hold),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Buy => write!(f, "buy"),
            Action::Sell => write!(f, "sell"),
            Action::Hold => write!(f, "hold"),
        }
    }
}

/// One row of the portfolio store.
///
/// `value` is derived: it must equal `quantity * price` at every
/// observation point. The only sanctioned mutation path is
/// `PortfolioStore::apply`, which recomputes `value` in the same
/// operation that changes `quantity`.
///
/// **Note on precision**: monetary amounts are `f64` (~15-17 significant
/// decimal digits). Quantities are whole shares (`u64`), so the derived
/// product is exact for realistic position sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, uppercased (e.g., "AAPL") — unique key within the store
    pub ticker: String,

    /// Human-readable company name (e.g., "Apple") — immutable
    pub company: String,

    /// Number of shares held — user-editable
    pub quantity: u64,

    /// Last known close price — system-supplied, not user-editable
    pub price: f64,

    /// Market value, always `quantity * price`
    pub value: f64,

    /// Trading intention — user-editable
    pub action: Action,

    /// Free-text notes (≤ 100 chars) — user-editable
    #[serde(default)]
    pub notes: String,
}

impl Holding {
    pub fn new(
        ticker: impl Into<String>,
        company: impl Into<String>,
        quantity: u64,
        price: f64,
        action: Action,
    ) -> Self {
        Self {
            ticker: ticker.into().to_uppercase(),
            company: company.into(),
            quantity,
            price,
            value: quantity as f64 * price,
            action,
            notes: String::new(),
        }
    }

    /// Re-derive `value` from the current quantity and price.
    pub fn recompute_value(&mut self) {
        self.value = self.quantity as f64 * self.price;
    }
}

/// A holding-to-be: what the user owns before prices are known.
/// `Dashboard::bootstrap` turns seeds into holdings by attaching the
/// last close from the price history snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPosition {
    pub ticker: String,
    pub company: String,
    pub quantity: u64,
    pub action: Action,
}

impl SeedPosition {
    pub fn new(
        ticker: impl Into<String>,
        company: impl Into<String>,
        quantity: u64,
        action: Action,
    ) -> Self {
        Self {
            ticker: ticker.into().to_uppercase(),
            company: company.into(),
            quantity,
            action,
        }
    }
}

/// The default eight-equity seed portfolio.
pub fn default_seed() -> Vec<SeedPosition> {
    vec![
        SeedPosition::new("AAPL", "Apple", 75, Action::Buy),
        SeedPosition::new("MSFT", "Microsoft", 40, Action::Sell),
        SeedPosition::new("AMZN", "Amazon", 100, Action::Hold),
        SeedPosition::new("GOOGL", "Alphabet", 50, Action::Hold),
        SeedPosition::new("TSLA", "Tesla", 40, Action::Hold),
        SeedPosition::new("BRK-B", "Berkshire Hathaway", 60, Action::Hold),
        SeedPosition::new("UNH", "United Health Group", 20, Action::Hold),
        SeedPosition::new("JNJ", "Johnson & Johnson", 40, Action::Hold),
    ]
}
