use penawaran::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn item(qty: Decimal, price: Decimal) -> LineItem {
    LineItemBuilder::new(qty, price).unit("pcs").build()
}

fn monitor_offer() -> Vec<LineItem> {
    vec![
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
    ]
}

// --- End-to-end ---

#[test]
fn percentage_discount_on_both_items() {
    let discount = DiscountConfig::percentage(dec!(10), DiscountTarget::items([0, 1]));
    let priced = price_quotation(&monitor_offer(), &discount, DEFAULT_VAT_RATE).unwrap();

    assert_eq!(priced.subtotal_gross, dec!(105000000));
    assert_eq!(priced.discount_amount, dec!(10500000));
    assert_eq!(priced.subtotal_net, dec!(94500000));
    assert_eq!(priced.vat_amount, dec!(10395000));
    assert_eq!(priced.grand_total, dec!(104895000));
    assert!(validate_breakdown(&priced, 0).is_empty());
}

#[test]
fn items_are_returned_unmodified() {
    let items = monitor_offer();
    let discount = DiscountConfig::fixed(dec!(777), DiscountTarget::items([1]));
    let priced = price_quotation(&items, &discount, DEFAULT_VAT_RATE).unwrap();
    assert_eq!(priced.items, items);
}

#[test]
fn all_target_matches_explicit_selection() {
    let all = DiscountConfig::percentage(dec!(12.5), DiscountTarget::All);
    let explicit = DiscountConfig::percentage(dec!(12.5), DiscountTarget::items([1, 0]));
    let a = price_quotation(&monitor_offer(), &all, DEFAULT_VAT_RATE).unwrap();
    let b = price_quotation(&monitor_offer(), &explicit, DEFAULT_VAT_RATE).unwrap();
    assert_eq!(a, b);
}

#[test]
fn percentage_all_equals_gross_times_rate() {
    let discount = DiscountConfig::percentage(dec!(7), DiscountTarget::All);
    let priced = price_quotation(&monitor_offer(), &discount, DEFAULT_VAT_RATE).unwrap();
    assert_eq!(priced.discount_amount, dec!(105000000) * dec!(0.07));
}

#[test]
fn hundred_percent_discount_zeroes_everything() {
    let discount = DiscountConfig::percentage(dec!(100), DiscountTarget::All);
    let priced = price_quotation(&monitor_offer(), &discount, DEFAULT_VAT_RATE).unwrap();
    assert_eq!(priced.discount_amount, priced.subtotal_gross);
    assert_eq!(priced.subtotal_net, Decimal::ZERO);
    assert_eq!(priced.grand_total, Decimal::ZERO);
    assert!(!priced.is_net_clamped());
}

// --- Fixed discount allocation ---

#[test]
fn fixed_discount_on_selected_items_is_weighted() {
    let items = vec![
        item(dec!(1), dec!(300)),
        item(dec!(1), dec!(100)),
        item(dec!(1), dec!(1000)),
    ];
    let discount = DiscountConfig::fixed(dec!(40), DiscountTarget::items([0, 1]));
    let priced = price_quotation(&items, &discount, DEFAULT_VAT_RATE).unwrap();

    assert_eq!(priced.allocations.len(), 2);
    assert_eq!(priced.discount_for(0), dec!(30));
    assert_eq!(priced.discount_for(1), dec!(10));
    assert_eq!(priced.discount_for(2), Decimal::ZERO);
    assert_eq!(priced.discount_amount, dec!(40));
    assert_eq!(priced.subtotal_net, dec!(1360));
}

#[test]
fn fixed_discount_reports_sum_of_shares() {
    let items = vec![
        item(dec!(1), dec!(1)),
        item(dec!(1), dec!(1)),
        item(dec!(1), dec!(1)),
    ];
    let discount = DiscountConfig::fixed(dec!(2), DiscountTarget::All);
    let priced = price_quotation(&items, &discount, DEFAULT_VAT_RATE).unwrap();
    let shares: Decimal = priced.allocations.iter().map(|a| a.amount).sum();
    assert_eq!(
        priced.discount_amount,
        shares.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    );
    assert_eq!(priced.discount_amount, dec!(2));
}

#[test]
fn fixed_discount_exceeding_subtotal_clamps_to_zero() {
    let items = vec![item(dec!(2), dec!(25)), item(dec!(1), dec!(50))];
    let discount = DiscountConfig::fixed(dec!(150), DiscountTarget::All);
    let priced = price_quotation(&items, &discount, DEFAULT_VAT_RATE).unwrap();

    assert_eq!(priced.subtotal_gross, dec!(100));
    assert_eq!(priced.subtotal_net, Decimal::ZERO);
    assert_eq!(priced.grand_total, Decimal::ZERO);
    assert!(priced.is_net_clamped());
    assert!(validate_breakdown(&priced, 0).is_empty());
}

#[test]
fn zero_weight_selection_is_benign() {
    let items = vec![item(dec!(5), dec!(0)), item(dec!(1), dec!(1000))];
    let discount = DiscountConfig::fixed(dec!(250), DiscountTarget::items([0]));
    let priced = price_quotation(&items, &discount, DEFAULT_VAT_RATE).unwrap();
    assert_eq!(priced.discount_amount, Decimal::ZERO);
    assert_eq!(priced.grand_total, dec!(1110));
}

#[test]
fn flat_policy_subtracts_nominal_value() {
    let config = PricingConfig::default().with_fixed_allocation(FixedAllocation::Flat);
    let discount = DiscountConfig::fixed(dec!(5000000), DiscountTarget::items([1]));
    let priced = price_quotation_with(&monitor_offer(), &discount, &config).unwrap();
    assert_eq!(priced.discount_amount, dec!(5000000));
    assert_eq!(priced.subtotal_net, dec!(100000000));
    assert_eq!(priced.vat_amount, dec!(11000000));
    assert!(priced.allocations.is_empty());
}

// --- Errors ---

#[test]
fn negative_discount_is_rejected() {
    let discount = DiscountConfig::fixed(dec!(-1), DiscountTarget::All);
    let err = price_quotation(&monitor_offer(), &discount, DEFAULT_VAT_RATE).unwrap_err();
    assert!(matches!(err, QuotationError::InvalidDiscountConfig(_)));
}

#[test]
fn invalid_percentage_message() {
    let discount = DiscountConfig::percentage(dec!(120), DiscountTarget::All);
    let err = price_quotation(&monitor_offer(), &discount, DEFAULT_VAT_RATE).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid discount config: discount.value: percentage must be within 0..=100, got 120"
    );
}

#[test]
fn out_of_range_index_is_rejected() {
    let discount = DiscountConfig::percentage(dec!(5), DiscountTarget::items([0, 7]));
    let err = price_quotation(&monitor_offer(), &discount, DEFAULT_VAT_RATE).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid discount config: discount.applies_to: item index 7 is out of range for 2 items"
    );
}

#[test]
fn invalid_line_item_is_rejected() {
    let items = vec![item(dec!(0), dec!(100))];
    let err = price_quotation(&items, &DiscountConfig::none(), DEFAULT_VAT_RATE).unwrap_err();
    assert!(matches!(err, QuotationError::InvalidLineItem(_)));
}

// --- Builder & config ---

#[test]
fn builder_prices_with_config() {
    let config = PricingConfig::from_toml_str(
        r#"
        vat_rate = "0.12"
        fixed_allocation = "proportional"
        "#,
    )
    .unwrap();

    let priced = QuotationBuilder::new()
        .items(monitor_offer())
        .discount(DiscountConfig::fixed(dec!(5000000), DiscountTarget::All))
        .config(config)
        .build()
        .unwrap();

    assert_eq!(priced.subtotal_net, dec!(100000000));
    assert_eq!(priced.vat_rate, dec!(0.12));
    assert_eq!(priced.vat_amount, dec!(12000000));
    assert_eq!(priced.grand_total, dec!(112000000));
}

#[test]
fn builder_vat_rate_override() {
    let priced = QuotationBuilder::new()
        .add_item(item(dec!(1), dec!(1000)))
        .vat_rate(Decimal::ZERO)
        .build()
        .unwrap();
    assert_eq!(priced.vat_amount, Decimal::ZERO);
    assert_eq!(priced.grand_total, dec!(1000));
}

#[test]
fn builder_rejects_too_many_items() {
    let result = QuotationBuilder::new()
        .items(std::iter::repeat_n(item(dec!(1), dec!(1)), 10_001))
        .build();
    assert!(matches!(result, Err(QuotationError::Builder(_))));
}

// --- Serialization ---

#[test]
fn discount_config_from_json() {
    let discount: DiscountConfig = serde_json::from_str(
        r#"{"kind":"percentage","value":"10","applies_to":{"items":[1,0,1]}}"#,
    )
    .unwrap();
    assert_eq!(
        discount,
        DiscountConfig::percentage(dec!(10), DiscountTarget::items([0, 1]))
    );

    let none: DiscountConfig = serde_json::from_str(r#"{"kind":"none"}"#).unwrap();
    assert_eq!(none, DiscountConfig::none());
}

#[test]
fn priced_quotation_serializes_exact_amounts() {
    let discount = DiscountConfig::percentage(dec!(10), DiscountTarget::All);
    let priced = price_quotation(&monitor_offer(), &discount, DEFAULT_VAT_RATE).unwrap();
    let json = serde_json::to_value(&priced).unwrap();
    assert_eq!(json["grand_total"], "104895000");
    assert_eq!(json["items"][0]["part_number"], "BV-T5");

    let back: PricedQuotation = serde_json::from_value(json).unwrap();
    assert_eq!(back, priced);
}
