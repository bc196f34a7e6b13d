use penawaran::core::*;
use rust_decimal_macros::dec;

fn main() {
    let items = vec![
        LineItemBuilder::new(dec!(2), dec!(45000000))
            .unit("unit")
            .part_number("BV-T5")
            .description("Patient monitor BeneView T5")
            .build(),
        LineItemBuilder::new(dec!(3), dec!(5000000))
            .unit("unit")
            .part_number("SPO2-M")
            .description("SpO2 module")
            .build(),
    ];

    // 10% off both lines
    let discount = DiscountConfig::percentage(dec!(10), DiscountTarget::items([0, 1]));

    match price_quotation(&items, &discount, DEFAULT_VAT_RATE) {
        Ok(priced) => {
            for (i, item) in priced.items.iter().enumerate() {
                println!(
                    "{:>6} {:<5} {:<8} {:>14} discount {}",
                    item.quantity,
                    item.unit_of_measure,
                    item.part_number.as_deref().unwrap_or("-"),
                    item.line_total(),
                    priced.discount_for(i)
                );
            }
            println!("Subtotal:    {}", priced.subtotal_gross);
            println!("Discount:    {}", priced.discount_amount);
            println!("Net:         {}", priced.subtotal_net);
            println!("PPN 11%:     {}", priced.vat_amount);
            println!("Grand total: {}", priced.grand_total);
        }
        Err(e) => eprintln!("Error: {e}"),
    }

    // A fixed discount spread proportionally over the selected lines
    let fixed = DiscountConfig::fixed(dec!(2500000), DiscountTarget::All);
    let priced = price_quotation(&items, &fixed, DEFAULT_VAT_RATE).unwrap();
    for allocation in &priced.allocations {
        println!("item {} gets {}", allocation.index, allocation.amount.round_dp(2));
    }
    println!("Grand total with fixed discount: {}", priced.grand_total);
}
