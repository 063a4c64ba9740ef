use ratatui::style::{Color, Modifier, Style};
use unsub_core::BadgeColor;

pub const TITLE: &str = "📧 Application de Désinscription";

pub fn badge_style(badge: BadgeColor) -> Style {
    let color = match badge {
        BadgeColor::Blue => Color::Blue,
        BadgeColor::Yellow => Color::Yellow,
        BadgeColor::Green => Color::Green,
        BadgeColor::Gray => Color::DarkGray,
    };
    Style::default().fg(color)
}

pub fn stat_value_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn stat_label_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn selected_row_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn muted_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn completed_style() -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}
