use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use crate::calc::{self, Outcome};
use crate::models::{BudgetQuery, Frequency, ReceiptMeta};
use crate::ui::util::{format_inr, parse_amount};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "plan" | "p" => cli_plan(&args[2..]),
        "bill" | "b" => cli_bill(&args[2..]),
        "menu" => {
            print_menu();
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("mandhitui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("MandhiTUI — Kuzhi Mandhi budget calculator");
    println!();
    println!("Usage: mandhitui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  plan <amount> [frequency]     Portions a budget buys at the menu price");
    println!("  bill <amount> [frequency]     Print an itemized receipt (GST included)");
    println!("    --price <n>                 Pre-tax price per quarter portion (default: 200)");
    println!("    --tax <rate>                Total GST fraction (default: 0.05)");
    println!("    --meals <n>                 Meals per day for the day count (default: 3)");
    println!("  menu                          Show the menu card");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Frequencies: single, daily, weekly, monthly, yearly (default: single)");
}

fn print_menu() {
    println!("KUZHI MANDHI HOUSE — Traditional Kerala Cuisine");
    println!("Est. 1985 • Kozhikode, Kerala");
    println!("{}", "─".repeat(46));
    println!("  {:<32}{:>10}", "Quarter Kuzhi Mandhi", "₹200.00");
    println!("    Aromatic basmati rice with tender mutton,");
    println!("    traditional spices & saffron");
    println!("    + 5% GST | Serves 1 person");
}

fn cli_plan(args: &[String]) -> Result<()> {
    let query = parse_query(
        args,
        "Usage: mandhitui plan <amount> [frequency] [--price <n>] [--tax <rate>] [--meals <n>]",
    )?;
    let analysis = calc::analyze(&query)?;
    let period = describe_period(&query, analysis.monthly_amount);

    match analysis.outcome {
        Outcome::Unaffordable => {
            println!(
                "With your {period}, you unfortunately cannot afford any quarter portions at {} each.",
                format_inr(query.unit_price)
            );
        }
        Outcome::Affordable { portions, days } => {
            println!("--- Mandhi Budget Analysis for your {period} ---");
            println!();
            println!(
                "Assuming a quarter Kuzhi Mandhi costs {}:",
                format_inr(query.unit_price)
            );
            println!();
            println!("Total quarter portions you can eat: {portions}");
            match days {
                Some(days) => println!(
                    "Days you can survive eating {} times a day: {days} days",
                    query.meals_per_day
                ),
                None => println!("You can't count days for 0 meals a day!"),
            }
            println!();
            println!("Happy eating!");
        }
    }

    Ok(())
}

fn cli_bill(args: &[String]) -> Result<()> {
    let query = parse_query(
        args,
        "Usage: mandhitui bill <amount> [frequency] [--price <n>] [--tax <rate>] [--meals <n>]",
    )?;
    let bill = calc::itemized_bill(&query)?;
    let meta = ReceiptMeta::generate();

    let dashed = "╌".repeat(40);
    let half_rate = (query.tax_rate * Decimal::from(50)).normalize();

    println!("{:^40}", "KUZHI MANDHI HOUSE");
    println!("{:^40}", "Traditional Kerala Cuisine");
    println!("{:^40}", "Ph: +91 9876543210");
    println!("{:^40}", "Kozhikode, Kerala");
    println!("{dashed}");

    if bill.portions > 0 {
        println!("With {} (GST included), you get:", format_inr(bill.paid));
        println!("  {} Quarter Kuzhi Mandhi portions", bill.portions);
        match bill.days {
            Some(days) => println!(
                "  Eating {} times daily = {days} days of meals",
                query.meals_per_day
            ),
            None => println!("  Can't count days for 0 meals a day!"),
        }
        println!(
            "  *Price includes GST ({} per portion)",
            format_inr(bill.price_with_tax)
        );
    } else {
        println!("Cannot afford any portions: a quarter");
        println!("portion is {} with GST.", format_inr(bill.price_with_tax));
    }

    println!("{dashed}");
    println!("{:<20}{:>20}", "Bill No:", format!("#{:04}", meta.bill_no));
    println!("{:<20}{:>20}", "Date:", meta.date);
    println!("{:<20}{:>20}", "Time:", meta.time);
    println!(
        "{:<20}{:>20}",
        "Frequency:",
        query.frequency.as_str().to_uppercase()
    );

    println!("{dashed}");
    println!("{:^40}", "ORDER DETAILS");
    println!("{:<20}{:>3}{:>8}{:>9}", "ITEM", "QTY", "RATE", "AMOUNT");
    println!(
        "{:<20}{:>3}{:>8}{:>9}",
        "Quarter Kuzhi Mandhi",
        bill.portions,
        format_inr(bill.unit_price),
        format_inr(bill.subtotal),
    );

    println!("{dashed}");
    println!("{:<20}{:>20}", "Subtotal:", format_inr(bill.subtotal));
    println!(
        "{:<20}{:>20}",
        format!("CGST ({half_rate}%):"),
        format_inr(bill.cgst)
    );
    println!(
        "{:<20}{:>20}",
        format!("SGST ({half_rate}%):"),
        format_inr(bill.sgst)
    );
    println!("{:<20}{:>20}", "TOTAL:", format_inr(bill.total));

    println!("{dashed}");
    println!("{:<20}{:>20}", "Amount Paid:", format_inr(bill.paid));
    if let Some(change) = bill.change() {
        println!("{:<20}{:>20}", "Change:", format_inr(change));
    }
    println!("{:<20}{:>20}", "Payment Mode:", "CASH");

    println!("{dashed}");
    println!("{:^40}", "Thank you for dining with us!");

    Ok(())
}

/// Shared positional/flag parsing for `plan` and `bill`. The amount is
/// forgiving (garbage becomes zero) but the operator overrides are not.
fn parse_query(args: &[String], usage: &str) -> Result<BudgetQuery> {
    let Some(raw_amount) = args.first().filter(|a| !a.starts_with("--")) else {
        anyhow::bail!("{usage}");
    };

    let amount = parse_amount(raw_amount);
    let frequency = args
        .get(1)
        .filter(|a| !a.starts_with('-'))
        .map(|a| Frequency::parse(a))
        .unwrap_or(Frequency::Single);

    let mut query = BudgetQuery::new(amount, frequency);
    if let Some(v) = flag_value(args, "--price") {
        query.unit_price = v
            .parse::<Decimal>()
            .map_err(|_| anyhow!("Invalid --price: {v}"))?;
    }
    if let Some(v) = flag_value(args, "--tax") {
        query.tax_rate = v
            .parse::<Decimal>()
            .map_err(|_| anyhow!("Invalid --tax: {v}"))?;
    }
    if let Some(v) = flag_value(args, "--meals") {
        query.meals_per_day = v
            .parse::<u32>()
            .map_err(|_| anyhow!("Invalid --meals: {v}"))?;
    }
    Ok(query)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

fn describe_period(query: &BudgetQuery, monthly: Decimal) -> String {
    let amount = format_inr(query.amount);
    match query.frequency {
        Frequency::Single => format!("single amount of {amount}"),
        Frequency::Monthly => format!("monthly budget of {amount}"),
        Frequency::Daily => format!(
            "daily budget of {amount} (totaling {} per month)",
            format_inr(monthly)
        ),
        Frequency::Weekly => format!(
            "weekly budget of {amount} (totaling {} per month)",
            format_inr(monthly)
        ),
        Frequency::Yearly => format!(
            "yearly budget of {amount} (analyzing one month: {})",
            format_inr(monthly)
        ),
    }
}
