#![no_main]

use libfuzzer_sys::fuzz_target;
use penawaran::core::*;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let items = penawaran::parser::parse_items(s);
        if items.len() > 1_000 {
            return;
        }
        // Parsed prices can be huge; rejections are fine, panics are bugs.
        let discount = DiscountConfig::fixed(rust_decimal::Decimal::ONE_HUNDRED, DiscountTarget::All);
        let _ = price_quotation(&items, &discount, DEFAULT_VAT_RATE);
    }
});
