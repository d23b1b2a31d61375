#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{BudgetQuery, Frequency};

fn query(amount: Decimal, frequency: Frequency) -> BudgetQuery {
    BudgetQuery::new(amount, frequency)
}

// ── analyze (tax-exclusive) ───────────────────────────────────

#[test]
fn test_analyze_single_amount() {
    let analysis = analyze(&query(dec!(1000), Frequency::Single)).unwrap();
    assert_eq!(analysis.monthly_amount, dec!(1000));
    assert_eq!(
        analysis.outcome,
        Outcome::Affordable {
            portions: 5,
            days: Some(1)
        }
    );
}

#[test]
fn test_analyze_yearly_normalizes_to_month() {
    let analysis = analyze(&query(dec!(12000), Frequency::Yearly)).unwrap();
    assert_eq!(analysis.monthly_amount, dec!(1000));
    assert_eq!(
        analysis.outcome,
        Outcome::Affordable {
            portions: 5,
            days: Some(1)
        }
    );
}

#[test]
fn test_analyze_daily_scales_up() {
    // ₹100/day over a 30-day month buys 15 portions
    let analysis = analyze(&query(dec!(100), Frequency::Daily)).unwrap();
    assert_eq!(analysis.monthly_amount, dec!(3000));
    assert_eq!(
        analysis.outcome,
        Outcome::Affordable {
            portions: 15,
            days: Some(5)
        }
    );
}

#[test]
fn test_analyze_zero_budget_is_unaffordable() {
    let analysis = analyze(&query(dec!(0), Frequency::Daily)).unwrap();
    assert_eq!(analysis.monthly_amount, dec!(0));
    assert_eq!(analysis.outcome, Outcome::Unaffordable);
}

#[test]
fn test_analyze_below_price_is_unaffordable() {
    let analysis = analyze(&query(dec!(199.99), Frequency::Single)).unwrap();
    assert_eq!(analysis.outcome, Outcome::Unaffordable);
}

#[test]
fn test_analyze_exact_price_buys_one() {
    let analysis = analyze(&query(dec!(200), Frequency::Single)).unwrap();
    assert_eq!(
        analysis.outcome,
        Outcome::Affordable {
            portions: 1,
            days: Some(0)
        }
    );
}

#[test]
fn test_analyze_negative_amount_is_unaffordable() {
    let analysis = analyze(&query(dec!(-500), Frequency::Single)).unwrap();
    assert_eq!(analysis.outcome, Outcome::Unaffordable);
}

#[test]
fn test_analyze_zero_meals_days_not_computable() {
    let mut q = query(dec!(1000), Frequency::Single);
    q.meals_per_day = 0;
    let analysis = analyze(&q).unwrap();
    assert_eq!(
        analysis.outcome,
        Outcome::Affordable {
            portions: 5,
            days: None
        }
    );
}

#[test]
fn test_analyze_rejects_zero_price() {
    let mut q = query(dec!(1000), Frequency::Single);
    q.unit_price = Decimal::ZERO;
    assert!(analyze(&q).is_err());

    q.unit_price = dec!(-1);
    assert!(analyze(&q).is_err());
}

#[test]
fn test_analyze_monotonic_in_amount() {
    let mut last = 0;
    for rupees in (0..5000).step_by(50) {
        let analysis = analyze(&query(Decimal::from(rupees), Frequency::Single)).unwrap();
        let portions = match analysis.outcome {
            Outcome::Unaffordable => 0,
            Outcome::Affordable { portions, .. } => portions,
        };
        assert!(
            portions >= last,
            "portions dropped from {last} to {portions} at ₹{rupees}"
        );
        last = portions;
    }
}

// ── itemized_bill (tax-inclusive) ─────────────────────────────

#[test]
fn test_bill_exact_settlement() {
    // ₹6300 at ₹210 tax-inclusive buys exactly 30 portions
    let bill = itemized_bill(&query(dec!(6300), Frequency::Single)).unwrap();
    assert_eq!(bill.portions, 30);
    assert_eq!(bill.price_with_tax, dec!(210.00));
    assert_eq!(bill.subtotal, dec!(6000));
    assert_eq!(bill.cgst, dec!(150.000));
    assert_eq!(bill.sgst, dec!(150.000));
    assert_eq!(bill.total, dec!(6300.000));
    assert_eq!(bill.change(), Some(dec!(0.000)));
    assert_eq!(bill.days, Some(10));
}

#[test]
fn test_bill_change_due() {
    let bill = itemized_bill(&query(dec!(500), Frequency::Single)).unwrap();
    assert_eq!(bill.portions, 2);
    assert_eq!(bill.subtotal, dec!(400));
    assert_eq!(bill.total, dec!(420.000));
    assert_eq!(bill.change(), Some(dec!(80.000)));
}

#[test]
fn test_bill_buys_fewer_than_nominal_price_suggests() {
    // ₹1000 buys 5 portions at the menu price but only 4 once GST is in
    let narrative = analyze(&query(dec!(1000), Frequency::Single)).unwrap();
    assert_eq!(
        narrative.outcome,
        Outcome::Affordable {
            portions: 5,
            days: Some(1)
        }
    );

    let bill = itemized_bill(&query(dec!(1000), Frequency::Single)).unwrap();
    assert_eq!(bill.portions, 4);
}

#[test]
fn test_bill_ignores_frequency() {
    // A receipt settles the cash handed over, whatever the budget cadence
    let single = itemized_bill(&query(dec!(1000), Frequency::Single)).unwrap();
    let daily = itemized_bill(&query(dec!(1000), Frequency::Daily)).unwrap();
    assert_eq!(single.portions, daily.portions);
    assert_eq!(single.total, daily.total);
}

#[test]
fn test_bill_total_never_below_subtotal() {
    for rupees in [0, 199, 200, 999, 6300, 100_000] {
        let bill = itemized_bill(&query(Decimal::from(rupees), Frequency::Single)).unwrap();
        assert!(bill.total >= bill.subtotal);
    }
}

#[test]
fn test_bill_zero_amount() {
    let bill = itemized_bill(&query(dec!(0), Frequency::Single)).unwrap();
    assert_eq!(bill.portions, 0);
    assert_eq!(bill.subtotal, dec!(0));
    assert_eq!(bill.total, dec!(0.00));
    assert_eq!(bill.change(), Some(dec!(0.00)));
}

#[test]
fn test_bill_zero_tax_rate() {
    let mut q = query(dec!(1000), Frequency::Single);
    q.tax_rate = Decimal::ZERO;
    let bill = itemized_bill(&q).unwrap();
    assert_eq!(bill.portions, 5);
    assert_eq!(bill.price_with_tax, dec!(200));
    assert_eq!(bill.total, bill.subtotal);
}

#[test]
fn test_bill_rejects_bad_config() {
    let mut q = query(dec!(1000), Frequency::Single);
    q.unit_price = Decimal::ZERO;
    assert!(itemized_bill(&q).is_err());

    let mut q = query(dec!(1000), Frequency::Single);
    q.tax_rate = dec!(-0.05);
    assert!(itemized_bill(&q).is_err());
}

#[test]
fn test_bill_zero_meals_days_not_computable() {
    let mut q = query(dec!(6300), Frequency::Single);
    q.meals_per_day = 0;
    let bill = itemized_bill(&q).unwrap();
    assert_eq!(bill.portions, 30);
    assert_eq!(bill.days, None);
}

#[test]
fn test_underpaid_bill_reports_no_change() {
    // Bills produced by itemized_bill always cover their own total; a
    // hand-adjusted payment must not surface negative change.
    let mut bill = itemized_bill(&query(dec!(6300), Frequency::Single)).unwrap();
    bill.paid = dec!(6000);
    assert_eq!(bill.change(), None);
}
