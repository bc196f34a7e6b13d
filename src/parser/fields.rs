//! Field-level parsing shared by the tabular and free-text formats.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::SkipReason;

/// Parse a quantity token using Indonesian number formatting.
///
/// `,` is the decimal separator and `.` groups thousands (`1.000` is one
/// thousand, `1.000,5` is 1000.5). A lone `.` that is not followed by
/// three-digit groups still reads as a decimal point (`1.5`). Comma-grouped
/// thousands (`1,000`) are rejected as ambiguous.
pub(crate) fn parse_quantity(token: &str) -> Result<Decimal, SkipReason> {
    let invalid = || SkipReason::InvalidQuantity(token.to_string());
    let token = token.trim();

    let (int_part, frac_part) = match token.split_once(',') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (token, None),
    };

    if is_grouped(token, ',') {
        return Err(invalid());
    }

    let normalized = if is_grouped(int_part, '.') {
        int_part.replace('.', "")
    } else if frac_part.is_none() {
        int_part.to_string()
    } else if int_part.contains('.') {
        return Err(invalid());
    } else {
        int_part.to_string()
    };
    let normalized = match frac_part {
        Some(frac) => format!("{normalized}.{frac}"),
        None => normalized,
    };

    if !normalized.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(invalid());
    }

    match Decimal::from_str(&normalized) {
        Ok(qty) if qty > Decimal::ZERO => Ok(qty),
        _ => Err(invalid()),
    }
}

/// True for `1.000`, `12.500.000` style digit groups (with `sep` as the
/// grouping character and no leading zero).
fn is_grouped(digits: &str, sep: char) -> bool {
    let mut groups = digits.split(sep);
    let Some(lead) = groups.next() else {
        return false;
    };
    let lead_ok = (1..=3).contains(&lead.len())
        && !lead.starts_with('0')
        && lead.bytes().all(|b| b.is_ascii_digit());
    let mut rest = groups.peekable();
    lead_ok
        && rest.peek().is_some()
        && rest.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}

/// Split a combined quantity cell such as `"2 unit"` into quantity and unit.
/// Tokens after the second are ignored.
pub(crate) fn parse_quantity_field(field: &str) -> Result<(Decimal, String), SkipReason> {
    let mut tokens = field.split_whitespace();
    let Some(first) = tokens.next() else {
        return Err(SkipReason::InvalidQuantity(field.to_string()));
    };
    let quantity = parse_quantity(first)?;
    let unit = tokens.next().unwrap_or_default().to_string();
    Ok((quantity, unit))
}

/// Parse a price token, stripping `.`/`,` thousands separators and stray
/// whitespace. Anything other than digits left over rejects the token.
pub(crate) fn parse_price(token: &str) -> Result<Decimal, SkipReason> {
    let digits: String = token
        .chars()
        .filter(|c| !matches!(c, '.' | ',') && !c.is_whitespace())
        .collect();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SkipReason::InvalidPrice(token.to_string()));
    }

    Decimal::from_str(&digits).map_err(|_| SkipReason::InvalidPrice(token.to_string()))
}

/// `None` for blank cells, trimmed text otherwise.
pub(crate) fn non_empty(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
