//! # penawaran
//!
//! Core of a price-offer ("penawaran") generator: a pricing engine with
//! percentage and fixed discounts, proportional discount allocation and
//! VAT (PPN), plus a best-effort parser for line items pasted from a
//! spreadsheet or typed into a chat.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Rounding to the currency's minor unit happens only on reported figures.
//!
//! ## Quick Start
//!
//! ```rust
//! use penawaran::core::*;
//! use penawaran::parser::parse_items;
//! use rust_decimal_macros::dec;
//!
//! let items = parse_items("2 unit MX-1 Patient monitor 45.000.000\n3 unit MX-2 SpO2 module 5.000.000");
//! let discount = DiscountConfig::percentage(dec!(10), DiscountTarget::All);
//!
//! let priced = price_quotation(&items, &discount, DEFAULT_VAT_RATE).unwrap();
//! assert_eq!(priced.subtotal_net, dec!(94500000));
//! assert_eq!(priced.grand_total, dec!(104895000));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Quotation types, pricing engine, validation, config |
//! | `parser` (default) | Free-text and tab-separated line item parser |
//! | `offer` | Offer letter numbering and Rupiah formatting |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "parser")]
pub mod parser;

#[cfg(feature = "offer")]
pub mod offer;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
