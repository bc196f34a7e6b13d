use chrono::NaiveDate;
use penawaran::core::*;
use penawaran::offer::{OfferNumberSequence, format_rupiah};
use penawaran::parser::parse_items;
use rust_decimal_macros::dec;

fn main() {
    let config = PricingConfig::from_toml_str(
        r#"
        vat_rate = "0.11"
        fixed_allocation = "proportional"
        "#,
    )
    .expect("valid config");

    let items = parse_items(
        "1 unit VNT-300 Ventilator Savina 300 385.000.000\n2 pcs FS-1 Flow sensor 4.500.000",
    );

    let priced = QuotationBuilder::new()
        .items(items)
        .discount(DiscountConfig::fixed(dec!(10000000), DiscountTarget::items([0])))
        .config(config)
        .build()
        .expect("priced quotation");

    let mut numbers = OfferNumberSequence::starting_at(993);
    let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();

    println!("No. Surat: {}", numbers.next_number(date));
    println!("Subtotal:  {}", format_rupiah(priced.subtotal_gross));
    println!("Diskon:    {}", format_rupiah(priced.discount_amount));
    println!("PPN 11%:   {}", format_rupiah(priced.vat_amount));
    println!("Total:     {}", format_rupiah(priced.grand_total));
}
