use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, MenuField};
use crate::ui::theme;

/// The landing screen: the restaurant's menu card with the budget form.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let width = 46.min(area.width.saturating_sub(2));
    let height = 22.min(area.height);
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

    let divider = "┄".repeat(width.saturating_sub(4) as usize);

    let amount_field = if app.amount_input.is_empty() {
        "  Enter Amount  ".to_string()
    } else {
        format!("  {}  ", app.amount_input)
    };
    let amount_style = if app.focus == MenuField::Amount {
        theme::selected_style()
    } else {
        theme::normal_style()
    };

    let frequency_field = format!("  ◂ {} ▸  ", app.frequency());
    let frequency_style = if app.focus == MenuField::Frequency {
        theme::selected_style()
    } else {
        theme::normal_style()
    };

    let lines = vec![
        Line::from(Span::styled("Traditional Kerala Cuisine", theme::accent_style())),
        Line::from(Span::styled("Est. 1985 • Kozhikode, Kerala", theme::dim_style())),
        Line::from(Span::styled("★★★★★", theme::price_style())),
        Line::from(Span::styled(&divider, theme::dim_style())),
        Line::from(vec![
            Span::styled("Quarter Kuzhi Mandhi  ", theme::normal_style()),
            Span::styled("₹200.00", theme::price_style()),
        ]),
        Line::from(Span::styled(
            "Aromatic basmati rice with tender mutton,",
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            "traditional spices & saffron",
            theme::dim_style(),
        )),
        Line::from(Span::styled("+ 5% GST | Serves 1 person", theme::dim_style())),
        Line::from(Span::styled(&divider, theme::dim_style())),
        Line::from(Span::styled("Your Budget Amount", theme::normal_style())),
        Line::from(Span::styled(amount_field, amount_style)),
        Line::from(""),
        Line::from(Span::styled("Budget Frequency", theme::normal_style())),
        Line::from(Span::styled(frequency_field, frequency_style)),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Calculate My Mandhi Plan",
            theme::accent_style(),
        )),
        Line::from(Span::styled(&divider, theme::dim_style())),
        Line::from(Span::styled(
            "Phone: +91 9876543210",
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            "\"Where Every Grain Tells a Story\"",
            theme::dim_style(),
        )),
    ];

    let text = Paragraph::new(lines).centered().block(block);
    f.render_widget(text, card);
}
