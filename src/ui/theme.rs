use ratatui::style::{Color, Modifier, Style};

pub(crate) const HEADER_BG: Color = Color::Rgb(43, 28, 18);
pub(crate) const ACCENT: Color = Color::Rgb(249, 146, 69);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const SAFFRON: Color = Color::Rgb(249, 226, 175);
pub(crate) const SURFACE: Color = Color::Rgb(62, 44, 30);
pub(crate) const TEXT: Color = Color::Rgb(244, 230, 214);
pub(crate) const TEXT_DIM: Color = Color::Rgb(166, 142, 120);
pub(crate) const OVERLAY: Color = Color::Rgb(92, 66, 45);

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn accent_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub(crate) fn price_style() -> Style {
    Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}
