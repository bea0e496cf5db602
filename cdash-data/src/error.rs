/// Error types for the dashboard core
use thiserror::Error;

/// Failure to read a currency string such as `$12,345.67` back into [`crate::money::Money`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyParseError {
    /// Input was empty (e.g. an unselected record)
    #[error("empty currency value")]
    Empty,

    /// First character is part of the number rather than a currency symbol
    #[error("missing currency symbol in {0:?}")]
    MissingSymbol(String),

    /// Nothing left after stripping the currency symbol
    #[error("missing amount after currency symbol in {0:?}")]
    MissingAmount(String),

    /// More than two digits after the decimal point
    #[error("too many fraction digits in {0:?}")]
    Precision(String),

    /// Non-digit characters in the amount
    #[error("invalid currency amount: {0:?}")]
    InvalidAmount(String),

    /// Amount does not fit in cents
    #[error("currency amount out of range: {0:?}")]
    Overflow(String),
}

/// Failure to read a percent string such as `4.2%`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PercentParseError {
    #[error("percent value must end with '%': {0:?}")]
    MissingSign(String),

    #[error("invalid percent value: {0:?}")]
    InvalidValue(String),
}

/// Failure while loading the embedded column configuration.
#[derive(Error, Debug)]
pub enum ColumnConfigError {
    /// Failed to parse CSV data
    #[error("Failed to parse column CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Column key does not name a record field
    #[error("Unknown record field: {0}")]
    UnknownField(String),

    /// Size column is not a positive integer
    #[error("Invalid column size {size:?} for {key}")]
    InvalidSize { key: String, size: String },
}

/// Failure to move the table's virtualized scroll position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrollError {
    /// The scroll container is not in the DOM yet (or anymore)
    #[error("virtualizer not mounted: {0}")]
    NotMounted(String),

    /// Requested row is past the end of the table
    #[error("row index {index} out of range (rows: {rows})")]
    OutOfRange { index: usize, rows: usize },
}
