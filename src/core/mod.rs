//! Quotation types, pricing engine and validation.
//!
//! The engine turns line items plus a discount configuration into a priced
//! breakdown (subtotal, discount, net, VAT, grand total). All amounts are
//! [`rust_decimal::Decimal`] and rounding happens only on reported figures.

mod builder;
mod config;
mod error;
mod pricing;
mod types;
mod validation;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use pricing::{DEFAULT_VAT_RATE, price_quotation, price_quotation_with};
pub use types::*;
pub use validation::*;
