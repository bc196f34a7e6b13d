use thiserror::Error;

/// Why a line could not be turned into a line item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SkipReason {
    /// Fewer columns (tabular) or tokens (free text) than the format needs.
    #[error("expected at least {required} fields, found {found}")]
    TooFewFields { required: usize, found: usize },

    /// Quantity is missing, not a number, or not positive.
    #[error("quantity {0:?} is not a positive number")]
    InvalidQuantity(String),

    /// Price is not purely numeric once separators are stripped.
    #[error("price {0:?} is not numeric")]
    InvalidPrice(String),
}

/// A source line the parser dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct UnparsableLine {
    /// 1-based line number in the raw input.
    pub line: usize,
    pub reason: SkipReason,
}
