use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use super::config::PricingConfig;
use super::error::{QuotationError, join_errors};
use super::types::*;
use super::validation;

/// Indonesian PPN rate (11%) as a fraction.
pub const DEFAULT_VAT_RATE: Decimal = dec!(0.11);

/// Price a quotation with the default policy and the given VAT rate.
///
/// ```
/// use penawaran::core::*;
/// use rust_decimal_macros::dec;
///
/// let items = vec![
///     LineItemBuilder::new(dec!(2), dec!(45000000)).build(),
///     LineItemBuilder::new(dec!(3), dec!(5000000)).build(),
/// ];
/// let discount = DiscountConfig::percentage(dec!(10), DiscountTarget::items([0, 1]));
///
/// let priced = price_quotation(&items, &discount, DEFAULT_VAT_RATE).unwrap();
/// assert_eq!(priced.subtotal_gross, dec!(105000000));
/// assert_eq!(priced.discount_amount, dec!(10500000));
/// assert_eq!(priced.grand_total, dec!(104895000));
/// ```
pub fn price_quotation(
    items: &[LineItem],
    discount: &DiscountConfig,
    vat_rate: Decimal,
) -> Result<PricedQuotation, QuotationError> {
    let config = PricingConfig::default().with_vat_rate(vat_rate);
    price_quotation_with(items, discount, &config)
}

/// Price a quotation under an explicit [`PricingConfig`].
///
/// Pure function: identical inputs always give identical output. Invalid
/// input is rejected as a whole, no partial breakdown is returned.
pub fn price_quotation_with(
    items: &[LineItem],
    discount: &DiscountConfig,
    config: &PricingConfig,
) -> Result<PricedQuotation, QuotationError> {
    let errors = validation::validate_vat_rate(config.vat_rate);
    if !errors.is_empty() {
        return Err(QuotationError::InvalidVatRate(join_errors(&errors)));
    }

    let errors = validation::validate_items(items);
    if !errors.is_empty() {
        return Err(QuotationError::InvalidLineItem(join_errors(&errors)));
    }

    let errors = validation::validate_discount(discount, items.len());
    if !errors.is_empty() {
        return Err(QuotationError::InvalidDiscountConfig(join_errors(&errors)));
    }

    let dp = config.currency_decimals;
    let subtotal_gross: Decimal = items.iter().map(LineItem::line_total).sum();

    let (allocations, discount_exact) = compute_discount(items, discount, config.fixed_allocation);
    let discount_amount = round_half_up(discount_exact, dp);

    let subtotal_net = if discount_amount > subtotal_gross {
        warn!(
            %discount_amount,
            %subtotal_gross,
            "discount exceeds subtotal, clamping net subtotal to zero"
        );
        Decimal::ZERO
    } else {
        // fractional quantities can leave a sub-unit remainder
        round_half_up(subtotal_gross - discount_amount, dp)
    };

    let vat_amount = round_half_up(subtotal_net * config.vat_rate, dp);
    let grand_total = subtotal_net + vat_amount;

    debug!(
        items = items.len(),
        %subtotal_gross,
        %discount_amount,
        %vat_amount,
        %grand_total,
        "priced quotation"
    );

    Ok(PricedQuotation {
        items: items.to_vec(),
        subtotal_gross,
        allocations,
        discount_amount,
        subtotal_net,
        vat_rate: config.vat_rate,
        vat_amount,
        grand_total,
    })
}

/// Per-item discount shares and their exact sum.
fn compute_discount(
    items: &[LineItem],
    discount: &DiscountConfig,
    policy: FixedAllocation,
) -> (Vec<DiscountAllocation>, Decimal) {
    if discount.kind == DiscountKind::None {
        return (Vec::new(), Decimal::ZERO);
    }

    if discount.applies_to.is_empty() {
        debug!(kind = ?discount.kind, "discount selects no items, skipping");
        return (Vec::new(), Decimal::ZERO);
    }
    let selected = discount.applies_to.indices(items.len());

    match discount.kind {
        DiscountKind::None => (Vec::new(), Decimal::ZERO),
        DiscountKind::Percentage => {
            let factor = discount.value / dec!(100);
            let allocations: Vec<DiscountAllocation> = selected
                .into_iter()
                .map(|index| DiscountAllocation {
                    index,
                    amount: items[index].line_total() * factor,
                })
                .collect();
            let total = allocations.iter().map(|a| a.amount).sum();
            (allocations, total)
        }
        DiscountKind::Fixed if policy == FixedAllocation::Flat => (Vec::new(), discount.value),
        DiscountKind::Fixed => {
            let weight: Decimal = selected.iter().map(|&i| items[i].line_total()).sum();
            if weight.is_zero() {
                debug!(value = %discount.value, "selected items total zero, fixed discount has no weight");
                return (Vec::new(), Decimal::ZERO);
            }
            let allocations: Vec<DiscountAllocation> = selected
                .into_iter()
                .map(|index| DiscountAllocation {
                    index,
                    amount: items[index].line_total() / weight * discount.value,
                })
                .collect();
            let total = allocations.iter().map(|a| a.amount).sum();
            (allocations, total)
        }
    }
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
