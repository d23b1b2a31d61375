use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::calc::Outcome;
use crate::models::Frequency;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_inr, truncate};

const INNER_WIDTH: usize = 40;

/// The printed receipt for the last placed order.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let (Some(query), Some(analysis), Some(bill), Some(meta)) = (
        app.query.as_ref(),
        app.analysis.as_ref(),
        app.bill.as_ref(),
        app.receipt_meta.as_ref(),
    ) else {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No order yet — place one from the Menu screen",
            theme::dim_style(),
        )))
        .centered();
        f.render_widget(msg, area);
        return;
    };

    let width = (INNER_WIDTH as u16 + 4).min(area.width.saturating_sub(2));
    let height = 34.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let card = Rect::new(x, y, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(Span::styled(
            " KUZHI MANDHI HOUSE ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ));

    let dashed = "╌".repeat(INNER_WIDTH);
    let center = |s: &str| format!("{s:^width$}", width = INNER_WIDTH);
    let kv = |label: &str, value: &str| format!("{label:<20}{value:>20}");

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            center("Traditional Kerala Cuisine"),
            theme::normal_style(),
        )),
        Line::from(Span::styled(center("Ph: +91 9876543210"), theme::dim_style())),
        Line::from(Span::styled(center("Kozhikode, Kerala"), theme::dim_style())),
        Line::from(Span::styled(&dashed, theme::dim_style())),
    ];

    // Analysis banner
    if bill.portions > 0 {
        lines.push(Line::from(Span::styled(
            center("Your Mandhi Analysis"),
            theme::accent_style(),
        )));
        lines.push(Line::from(Span::styled(
            center(&format!(
                "With {} (GST included), you get:",
                format_inr(bill.paid)
            )),
            theme::normal_style(),
        )));
        lines.push(Line::from(Span::styled(
            center(&format!("{} Quarter Kuzhi Mandhi portions", bill.portions)),
            theme::price_style(),
        )));
        lines.push(Line::from(Span::styled(
            center(&match bill.days {
                Some(days) => format!(
                    "Eating {} times daily = {days} days of meals",
                    query.meals_per_day
                ),
                None => "Can't count days for 0 meals a day!".to_string(),
            }),
            theme::normal_style(),
        )));
        lines.push(Line::from(Span::styled(
            center(&format!(
                "*Price includes GST ({} per portion)",
                format_inr(bill.price_with_tax)
            )),
            theme::dim_style(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            center("Cannot afford any portions"),
            Style::default().fg(theme::RED).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            center(&format!(
                "A quarter portion is {} with GST",
                format_inr(bill.price_with_tax)
            )),
            theme::dim_style(),
        )));
    }

    // Monthly view at the nominal menu price, for recurring budgets
    if query.frequency != Frequency::Single {
        let basis = match analysis.outcome {
            Outcome::Affordable { portions, .. } => format!(
                "Monthly basis: {} ≈ {portions} portions pre-tax",
                format_inr(analysis.monthly_amount)
            ),
            Outcome::Unaffordable => format!(
                "Monthly basis: {} — below one portion",
                format_inr(analysis.monthly_amount)
            ),
        };
        lines.push(Line::from(Span::styled(center(&basis), theme::dim_style())));
    }

    lines.push(Line::from(Span::styled(&dashed, theme::dim_style())));
    lines.push(Line::from(Span::styled(
        kv("Bill No:", &format!("#{:04}", meta.bill_no)),
        theme::normal_style(),
    )));
    lines.push(Line::from(Span::styled(
        kv("Date:", &meta.date),
        theme::normal_style(),
    )));
    lines.push(Line::from(Span::styled(
        kv("Time:", &meta.time),
        theme::normal_style(),
    )));
    lines.push(Line::from(Span::styled(
        kv("Frequency:", &query.frequency.as_str().to_uppercase()),
        theme::normal_style(),
    )));

    lines.push(Line::from(Span::styled(&dashed, theme::dim_style())));
    lines.push(Line::from(Span::styled(
        center("ORDER DETAILS"),
        theme::accent_style(),
    )));
    lines.push(Line::from(Span::styled(
        format!("{:<20}{:>3}{:>8}{:>9}", "ITEM", "QTY", "RATE", "AMOUNT"),
        theme::dim_style(),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "{:<20}{:>3}{:>8}{:>9}",
            truncate("Quarter Kuzhi Mandhi", 20),
            bill.portions,
            format_inr(bill.unit_price),
            format_inr(bill.subtotal),
        ),
        theme::normal_style(),
    )));

    let half_rate = (query.tax_rate * Decimal::from(50)).normalize();
    lines.push(Line::from(Span::styled(&dashed, theme::dim_style())));
    lines.push(Line::from(Span::styled(
        kv("Subtotal:", &format_inr(bill.subtotal)),
        theme::normal_style(),
    )));
    lines.push(Line::from(Span::styled(
        kv(&format!("CGST ({half_rate}%):"), &format_inr(bill.cgst)),
        theme::normal_style(),
    )));
    lines.push(Line::from(Span::styled(
        kv(&format!("SGST ({half_rate}%):"), &format_inr(bill.sgst)),
        theme::normal_style(),
    )));
    lines.push(Line::from(Span::styled(
        kv("TOTAL:", &format_inr(bill.total)),
        theme::price_style(),
    )));

    lines.push(Line::from(Span::styled(&dashed, theme::dim_style())));
    lines.push(Line::from(Span::styled(
        kv("Amount Paid:", &format_inr(bill.paid)),
        theme::normal_style(),
    )));
    if let Some(change) = bill.change() {
        lines.push(Line::from(Span::styled(
            kv("Change:", &format_inr(change)),
            Style::default().fg(theme::GREEN),
        )));
    }
    lines.push(Line::from(Span::styled(
        kv("Payment Mode:", "CASH"),
        theme::normal_style(),
    )));

    lines.push(Line::from(Span::styled(&dashed, theme::dim_style())));
    lines.push(Line::from(Span::styled(
        center("Thank you for dining with us!"),
        theme::dim_style(),
    )));
    lines.push(Line::from(Span::styled(
        center("★★★★★ \"Best Mandhi in Town!\" ★★★★★"),
        theme::dim_style(),
    )));

    let text = Paragraph::new(lines).block(block);
    f.render_widget(text, card);
}
