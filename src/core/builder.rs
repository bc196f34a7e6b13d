use rust_decimal::Decimal;

use super::config::PricingConfig;
use super::error::QuotationError;
use super::pricing;
use super::types::*;

/// Builder for assembling and pricing a quotation.
///
/// ```
/// use penawaran::core::*;
/// use rust_decimal_macros::dec;
///
/// let priced = QuotationBuilder::new()
///     .add_item(LineItemBuilder::new(dec!(1), dec!(12500000))
///         .unit("set")
///         .part_number("MX-200")
///         .description("Infusion pump")
///         .build())
///     .discount(DiscountConfig::fixed(dec!(500000), DiscountTarget::All))
///     .build()
///     .unwrap();
///
/// assert_eq!(priced.subtotal_net, dec!(12000000));
/// assert_eq!(priced.vat_amount, dec!(1320000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuotationBuilder {
    items: Vec<LineItem>,
    discount: DiscountConfig,
    config: PricingConfig,
}

impl QuotationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = LineItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn discount(mut self, discount: DiscountConfig) -> Self {
        self.discount = discount;
        self
    }

    pub fn vat_rate(mut self, rate: Decimal) -> Self {
        self.config.vat_rate = rate;
        self
    }

    pub fn config(mut self, config: PricingConfig) -> Self {
        self.config = config;
        self
    }

    /// Price the assembled quotation.
    pub fn build(self) -> Result<PricedQuotation, QuotationError> {
        // Input limits to prevent abuse
        if self.items.len() > 10_000 {
            return Err(QuotationError::Builder(
                "quotation cannot have more than 10,000 line items".into(),
            ));
        }

        pricing::price_quotation_with(&self.items, &self.discount, &self.config)
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    quantity: Decimal,
    unit_price: Decimal,
    unit_of_measure: String,
    part_number: Option<String>,
    description: Option<String>,
}

impl LineItemBuilder {
    pub fn new(quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
            unit_of_measure: String::new(),
            part_number: None,
            description: None,
        }
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit_of_measure = unit.into();
        self
    }

    pub fn part_number(mut self, part: impl Into<String>) -> Self {
        self.part_number = Some(part.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            quantity: self.quantity,
            unit_of_measure: self.unit_of_measure,
            part_number: self.part_number,
            description: self.description,
            unit_price: self.unit_price,
        }
    }
}
