use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a quotation: a quantity of a priced part or service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Quantity, positive and possibly fractional.
    pub quantity: Decimal,
    /// Unit of measure label (e.g. "pcs", "set"). Empty when unknown.
    #[serde(default)]
    pub unit_of_measure: String,
    /// Manufacturer or catalogue part number.
    #[serde(default)]
    pub part_number: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Price per unit in currency units (whole Rupiah for IDR).
    pub unit_price: Decimal,
}

impl LineItem {
    /// `quantity * unit_price`, exact. Always derived, never cached.
    pub fn line_total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// How a discount is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    /// No discount.
    #[default]
    None,
    /// `value` percent of each selected line total.
    Percentage,
    /// Nominal amount spread over the selected lines.
    Fixed,
}

/// Which line items a discount applies to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTarget {
    /// Every item of the quotation.
    #[default]
    All,
    /// Zero-based item indices.
    Items(BTreeSet<usize>),
}

impl DiscountTarget {
    /// Select the given item indices. Duplicates collapse.
    pub fn items(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::Items(indices.into_iter().collect())
    }

    /// True if no item is selected (only possible for an empty `Items` set).
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Items(set) if set.is_empty())
    }

    /// Resolve to concrete indices for a quotation with `item_count` items.
    /// Out-of-range indices are dropped; validation reports them separately.
    pub fn indices(&self, item_count: usize) -> Vec<usize> {
        match self {
            Self::All => (0..item_count).collect(),
            Self::Items(set) => set.iter().copied().filter(|&i| i < item_count).collect(),
        }
    }
}

/// Discount parameters of a quotation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscountConfig {
    pub kind: DiscountKind,
    /// Percent (0–100) for `Percentage`, currency amount for `Fixed`.
    #[serde(default)]
    pub value: Decimal,
    #[serde(default)]
    pub applies_to: DiscountTarget,
}

impl DiscountConfig {
    /// No discount at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn percentage(value: Decimal, applies_to: DiscountTarget) -> Self {
        Self {
            kind: DiscountKind::Percentage,
            value,
            applies_to,
        }
    }

    pub fn fixed(value: Decimal, applies_to: DiscountTarget) -> Self {
        Self {
            kind: DiscountKind::Fixed,
            value,
            applies_to,
        }
    }
}

/// Policy for distributing a `Fixed` discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedAllocation {
    /// Spread over the selected items, weighted by their line totals.
    #[default]
    Proportional,
    /// Subtract the nominal amount from the subtotal, no per-item shares.
    Flat,
}

/// The part of the discount attributed to a single line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountAllocation {
    /// Zero-based index into `PricedQuotation::items`.
    pub index: usize,
    /// Exact, unrounded share.
    pub amount: Decimal,
}

/// Priced breakdown of a quotation, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedQuotation {
    /// Input items, unmodified.
    pub items: Vec<LineItem>,
    /// Sum of all line totals, including items the discount does not touch.
    pub subtotal_gross: Decimal,
    /// Per-item discount shares, ordered by index. Empty without discount
    /// or under the flat policy.
    pub allocations: Vec<DiscountAllocation>,
    /// Sum of the shares, rounded to the currency's minor unit.
    pub discount_amount: Decimal,
    /// `subtotal_gross - discount_amount` rounded to the minor unit, never
    /// below zero.
    pub subtotal_net: Decimal,
    /// VAT rate applied, as a fraction (0.11 = 11%).
    pub vat_rate: Decimal,
    /// `subtotal_net * vat_rate`, rounded.
    pub vat_amount: Decimal,
    /// `subtotal_net + vat_amount`.
    pub grand_total: Decimal,
}

impl PricedQuotation {
    /// True if the discount exceeded the gross subtotal and the net subtotal
    /// was clamped to zero.
    pub fn is_net_clamped(&self) -> bool {
        self.discount_amount > self.subtotal_gross
    }

    /// Discount share of the item at `index`, zero if it has none.
    pub fn discount_for(&self, index: usize) -> Decimal {
        self.allocations
            .iter()
            .find(|a| a.index == index)
            .map(|a| a.amount)
            .unwrap_or(Decimal::ZERO)
    }
}
