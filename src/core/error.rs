use thiserror::Error;

/// Errors that can occur while pricing a quotation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuotationError {
    /// Discount parameters are malformed (out-of-range percentage, negative
    /// value, selection pointing past the item list).
    #[error("invalid discount config: {0}")]
    InvalidDiscountConfig(String),

    /// VAT rate outside `[0, 1]`.
    #[error("invalid VAT rate: {0}")]
    InvalidVatRate(String),

    /// A line item carries a non-positive quantity or a negative price.
    #[error("invalid line item: {0}")]
    InvalidLineItem(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Pricing configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items[2].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Join a list of validation errors into one message.
pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
