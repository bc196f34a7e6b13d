use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::types::*;

/// Largest line total, subtotal or fixed discount accepted for pricing.
/// Keeps every intermediate product well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000000000000);

/// Validate line items before pricing.
/// Returns all validation errors found (not just the first).
pub fn validate_items(items: &[LineItem]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut subtotal = Some(Decimal::ZERO);
    let mut line_overflow = false;

    for (i, item) in items.iter().enumerate() {
        match item.quantity.checked_mul(item.unit_price) {
            Some(total) if total.abs() <= MAX_AMOUNT => {
                subtotal = subtotal.and_then(|s| s.checked_add(total));
            }
            _ => {
                errors.push(ValidationError::new(
                    format!("items[{i}]"),
                    format!("line total exceeds the supported maximum of {MAX_AMOUNT}"),
                ));
                line_overflow = true;
            }
        }
        if item.quantity <= Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("items[{i}].quantity"),
                format!("quantity must be positive, got {}", item.quantity),
            ));
        }
        if item.unit_price < Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("items[{i}].unit_price"),
                format!("unit price must not be negative, got {}", item.unit_price),
            ));
        }
    }

    if !line_overflow && subtotal.is_none_or(|total| total > MAX_AMOUNT) {
        errors.push(ValidationError::new(
            "items",
            format!("subtotal exceeds the supported maximum of {MAX_AMOUNT}"),
        ));
    }

    errors
}

/// Validate discount parameters against a quotation with `item_count` items.
///
/// An empty selection is not an error: it prices as no discount.
pub fn validate_discount(discount: &DiscountConfig, item_count: usize) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if discount.kind == DiscountKind::None {
        return errors;
    }

    if discount.value < Decimal::ZERO {
        errors.push(ValidationError::new(
            "discount.value",
            format!("discount must not be negative, got {}", discount.value),
        ));
    }

    if discount.value > MAX_AMOUNT {
        errors.push(ValidationError::new(
            "discount.value",
            format!("discount exceeds the supported maximum of {MAX_AMOUNT}"),
        ));
    }

    if discount.kind == DiscountKind::Percentage && discount.value > dec!(100) {
        errors.push(ValidationError::new(
            "discount.value",
            format!("percentage must be within 0..=100, got {}", discount.value),
        ));
    }

    if let DiscountTarget::Items(indices) = &discount.applies_to {
        for &index in indices.iter().filter(|&&i| i >= item_count) {
            errors.push(ValidationError::new(
                "discount.applies_to",
                format!("item index {index} is out of range for {item_count} items"),
            ));
        }
    }

    errors
}

/// Validate a VAT rate given as a fraction.
pub fn validate_vat_rate(rate: Decimal) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        errors.push(ValidationError::new(
            "vat_rate",
            format!("VAT rate must be a fraction within 0..=1, got {rate}"),
        ));
    }
    errors
}

/// Check the arithmetic of a priced quotation.
///
/// `dp` is the currency's minor-unit precision the quotation was rounded to.
pub fn validate_breakdown(quotation: &PricedQuotation, dp: u32) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let expected_gross: Decimal = quotation.items.iter().map(LineItem::line_total).sum();
    if quotation.subtotal_gross != expected_gross {
        errors.push(ValidationError::new(
            "subtotal_gross",
            format!(
                "gross subtotal {} does not match sum of line totals {}",
                quotation.subtotal_gross, expected_gross
            ),
        ));
    }

    if !quotation.allocations.is_empty() {
        let shares: Decimal = quotation.allocations.iter().map(|a| a.amount).sum();
        let expected_discount = super::pricing::round_half_up(shares, dp);
        if quotation.discount_amount != expected_discount {
            errors.push(ValidationError::new(
                "discount_amount",
                format!(
                    "discount {} does not match sum of allocations {}",
                    quotation.discount_amount, expected_discount
                ),
            ));
        }
    }

    for window in quotation.allocations.windows(2) {
        if window[0].index >= window[1].index {
            errors.push(ValidationError::new(
                "allocations",
                "allocations must be ordered by item index without duplicates",
            ));
            break;
        }
    }

    let expected_net = super::pricing::round_half_up(
        (quotation.subtotal_gross - quotation.discount_amount).max(Decimal::ZERO),
        dp,
    );
    if quotation.subtotal_net != expected_net {
        errors.push(ValidationError::new(
            "subtotal_net",
            format!(
                "net subtotal {} does not match gross {} - discount {}",
                quotation.subtotal_net, quotation.subtotal_gross, quotation.discount_amount
            ),
        ));
    }

    let expected_vat = super::pricing::round_half_up(quotation.subtotal_net * quotation.vat_rate, dp);
    if quotation.vat_amount != expected_vat {
        errors.push(ValidationError::new(
            "vat_amount",
            format!(
                "VAT {} does not match net {} * rate {}",
                quotation.vat_amount, quotation.subtotal_net, quotation.vat_rate
            ),
        ));
    }

    if quotation.grand_total != quotation.subtotal_net + quotation.vat_amount {
        errors.push(ValidationError::new(
            "grand_total",
            format!(
                "grand total {} does not match net {} + VAT {}",
                quotation.grand_total, quotation.subtotal_net, quotation.vat_amount
            ),
        ));
    }

    errors
}
