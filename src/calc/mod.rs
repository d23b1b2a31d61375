use anyhow::Result;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::BudgetQuery;

/// Tax-exclusive affordability at the nominal menu price: how many
/// quarter portions a budget buys, normalized to one month of eating.
#[derive(Debug, Clone)]
pub(crate) struct Analysis {
    /// The budget scaled to a common monthly basis.
    pub monthly_amount: Decimal,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The normalized budget does not cover a single portion.
    Unaffordable,
    Affordable {
        portions: u32,
        /// Full days of eating at the query's meals-per-day rate.
        /// `None` when meals per day is zero — not computable.
        days: Option<u32>,
    },
}

pub(crate) fn analyze(query: &BudgetQuery) -> Result<Analysis> {
    if query.unit_price <= Decimal::ZERO {
        anyhow::bail!("portion price must be greater than zero");
    }

    let monthly_amount = query.frequency.monthly_amount(query.amount);
    let portions = floor_count(monthly_amount, query.unit_price);

    let outcome = if portions == 0 {
        Outcome::Unaffordable
    } else {
        Outcome::Affordable {
            portions,
            days: sustained_days(portions, query.meals_per_day),
        }
    };

    Ok(Analysis {
        monthly_amount,
        outcome,
    })
}

/// One line of a printed cash receipt, tax included. Unlike the
/// narrative analysis this settles the amount actually handed over, so
/// the frequency is not normalized here — it appears on the bill for
/// reference only.
#[derive(Debug, Clone)]
pub(crate) struct Bill {
    pub portions: u32,
    pub unit_price: Decimal,
    pub price_with_tax: Decimal,
    pub subtotal: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub total: Decimal,
    pub paid: Decimal,
    /// Same not-computable marker as the narrative path.
    pub days: Option<u32>,
}

impl Bill {
    /// Change due back, reported only when the payment covers the total.
    /// Underpayment is never an error — it just goes unreported.
    pub(crate) fn change(&self) -> Option<Decimal> {
        let diff = self.paid - self.total;
        (diff >= Decimal::ZERO).then_some(diff)
    }
}

pub(crate) fn itemized_bill(query: &BudgetQuery) -> Result<Bill> {
    if query.unit_price <= Decimal::ZERO {
        anyhow::bail!("portion price must be greater than zero");
    }
    if query.tax_rate < Decimal::ZERO {
        anyhow::bail!("tax rate cannot be negative");
    }

    let price_with_tax = query.unit_price * (Decimal::ONE + query.tax_rate);
    let portions = floor_count(query.amount, price_with_tax);

    let subtotal = Decimal::from(portions) * query.unit_price;
    let half_tax = subtotal * (query.tax_rate / Decimal::from(2));
    let total = subtotal + half_tax + half_tax;

    Ok(Bill {
        portions,
        unit_price: query.unit_price,
        price_with_tax,
        subtotal,
        cgst: half_tax,
        sgst: half_tax,
        total,
        paid: query.amount,
        days: sustained_days(portions, query.meals_per_day),
    })
}

/// Whole portions a sum of money buys at a given price. Negative
/// amounts floor to zero portions rather than a negative count.
fn floor_count(amount: Decimal, price: Decimal) -> u32 {
    (amount / price).floor().to_u32().unwrap_or(0)
}

fn sustained_days(portions: u32, meals_per_day: u32) -> Option<u32> {
    (meals_per_day > 0).then(|| portions / meals_per_day)
}

#[cfg(test)]
mod tests;
