use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::QuotationError;
use super::pricing::DEFAULT_VAT_RATE;
use super::types::FixedAllocation;

/// Pricing parameters that stay fixed across quotations.
///
/// Every field has a default, so a partial TOML table is enough:
///
/// ```
/// use penawaran::core::*;
/// use rust_decimal_macros::dec;
///
/// let config = PricingConfig::from_toml_str("fixed_allocation = \"flat\"").unwrap();
/// assert_eq!(config.vat_rate, dec!(0.11));
/// assert_eq!(config.fixed_allocation, FixedAllocation::Flat);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    /// VAT (PPN) rate as a fraction.
    pub vat_rate: Decimal,
    /// Decimal places of the currency's minor unit. 0 for Rupiah.
    pub currency_decimals: u32,
    /// Policy for `Fixed` discounts.
    pub fixed_allocation: FixedAllocation,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            vat_rate: DEFAULT_VAT_RATE,
            currency_decimals: 0,
            fixed_allocation: FixedAllocation::Proportional,
        }
    }
}

impl PricingConfig {
    /// Parse a config from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, QuotationError> {
        toml::from_str(s).map_err(|e| QuotationError::Config(e.to_string()))
    }

    pub fn with_vat_rate(mut self, rate: Decimal) -> Self {
        self.vat_rate = rate;
        self
    }

    pub fn with_currency_decimals(mut self, dp: u32) -> Self {
        self.currency_decimals = dp;
        self
    }

    pub fn with_fixed_allocation(mut self, policy: FixedAllocation) -> Self {
        self.fixed_allocation = policy;
        self
    }
}
