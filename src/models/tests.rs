#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── Frequency ─────────────────────────────────────────────────

#[test]
fn test_frequency_parse() {
    assert_eq!(Frequency::parse("single"), Frequency::Single);
    assert_eq!(Frequency::parse("daily"), Frequency::Daily);
    assert_eq!(Frequency::parse("DAILY"), Frequency::Daily);
    assert_eq!(Frequency::parse("Weekly"), Frequency::Weekly);
    assert_eq!(Frequency::parse("monthly"), Frequency::Monthly);
    assert_eq!(Frequency::parse("yearly"), Frequency::Yearly);
    assert_eq!(Frequency::parse("annual"), Frequency::Yearly);
}

#[test]
fn test_frequency_parse_unknown_defaults_to_single() {
    assert_eq!(Frequency::parse(""), Frequency::Single);
    assert_eq!(Frequency::parse("fortnightly"), Frequency::Single);
    assert_eq!(Frequency::parse("  "), Frequency::Single);
}

#[test]
fn test_frequency_as_str() {
    assert_eq!(Frequency::Single.as_str(), "Single Amount");
    assert_eq!(Frequency::Daily.as_str(), "Daily");
    assert_eq!(Frequency::Weekly.as_str(), "Weekly");
    assert_eq!(Frequency::Monthly.as_str(), "Monthly");
    assert_eq!(Frequency::Yearly.as_str(), "Yearly");
}

#[test]
fn test_frequency_display() {
    assert_eq!(format!("{}", Frequency::Daily), "Daily");
    assert_eq!(format!("{}", Frequency::Single), "Single Amount");
}

#[test]
fn test_frequency_all() {
    let all = Frequency::all();
    assert_eq!(all.len(), 5);
    assert!(all.contains(&Frequency::Single));
    assert!(all.contains(&Frequency::Yearly));
}

#[test]
fn test_frequency_roundtrip() {
    // Every frequency should roundtrip through as_str -> parse
    for f in Frequency::all() {
        let s = f.as_str();
        let back = Frequency::parse(s);
        assert_eq!(*f, back, "Roundtrip failed for {s}");
    }
}

#[test]
fn test_monthly_amount_scaling() {
    assert_eq!(Frequency::Single.monthly_amount(dec!(500)), dec!(500));
    assert_eq!(Frequency::Monthly.monthly_amount(dec!(500)), dec!(500));
    assert_eq!(Frequency::Daily.monthly_amount(dec!(100)), dec!(3000));
    assert_eq!(Frequency::Weekly.monthly_amount(dec!(500)), dec!(2000));
    assert_eq!(Frequency::Yearly.monthly_amount(dec!(12000)), dec!(1000));
}

#[test]
fn test_monthly_amount_equivalences() {
    // Daily(x) covers the same month as Monthly(30x), etc.
    assert_eq!(
        Frequency::Daily.monthly_amount(dec!(70)),
        Frequency::Monthly.monthly_amount(dec!(2100))
    );
    assert_eq!(
        Frequency::Weekly.monthly_amount(dec!(250)),
        Frequency::Monthly.monthly_amount(dec!(1000))
    );
    assert_eq!(
        Frequency::Yearly.monthly_amount(dec!(2400)),
        Frequency::Monthly.monthly_amount(dec!(200))
    );
}

// ── BudgetQuery ───────────────────────────────────────────────

#[test]
fn test_query_menu_defaults() {
    let query = BudgetQuery::new(dec!(1000), Frequency::Single);
    assert_eq!(query.amount, dec!(1000));
    assert_eq!(query.frequency, Frequency::Single);
    assert_eq!(query.unit_price, dec!(200));
    assert_eq!(query.tax_rate, dec!(0.05));
    assert_eq!(query.meals_per_day, 3);
}

// ── ReceiptMeta ───────────────────────────────────────────────

#[test]
fn test_receipt_meta_generate() {
    let meta = ReceiptMeta::generate();
    assert!(meta.bill_no < 10_000);
    // DD/MM/YYYY
    assert_eq!(meta.date.len(), 10);
    assert_eq!(meta.date.matches('/').count(), 2);
    assert!(meta.time.ends_with("AM") || meta.time.ends_with("PM"));
}
