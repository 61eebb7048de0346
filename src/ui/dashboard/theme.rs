//! Class-name stylesheet
//!
//! Components describe what they draw with the same class vocabulary the
//! dashboard has always used (`sidebar collapsed`, `nav-item active`,
//! `status-badge status-deposit`, ...). This module is the only place those
//! names are turned into terminal styles.

use ratatui::prelude::{Color, Modifier, Style};

pub const INDIGO: Color = Color::Rgb(0x4F, 0x46, 0xE5);
pub const EMERALD: Color = Color::Rgb(0x10, 0xB9, 0x81);
pub const AMBER: Color = Color::Rgb(0xF5, 0x9E, 0x0B);
pub const RED: Color = Color::Rgb(0xEF, 0x44, 0x44);
pub const SLATE: Color = Color::Rgb(0x6B, 0x72, 0x80);

/// Screen background when background colors are enabled.
pub const BACKGROUND: Color = Color::Rgb(16, 20, 24);
const SIDEBAR_BACKGROUND: Color = Color::Rgb(17, 24, 39);

/// Resolve a space-separated class list, patching styles left to right.
pub fn style_for(classes: &str) -> Style {
    classes
        .split_whitespace()
        .fold(Style::default(), |style, class| style.patch(class_style(class)))
}

/// Border colour for the boxed panels.
pub fn border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn class_style(class: &str) -> Style {
    match class {
        "sidebar" => Style::default().fg(Color::Gray).bg(SIDEBAR_BACKGROUND),
        "open" => Style::default().add_modifier(Modifier::BOLD),
        "logo-icon" => Style::default().fg(AMBER),
        "logo-text" => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        "nav-item" => Style::default().fg(SLATE),
        "active" => Style::default()
            .fg(Color::White)
            .bg(INDIGO)
            .add_modifier(Modifier::BOLD),
        "toggle-btn" => Style::default().fg(Color::LightBlue),
        "header" => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        "mobile-menu-btn" => Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
        "user-profile" => Style::default().fg(Color::Cyan),
        "summary-card" => Style::default().fg(Color::Gray),
        "card-icon" => Style::default().add_modifier(Modifier::BOLD),
        "total-savings" => Style::default().fg(INDIGO),
        "total-members" => Style::default().fg(EMERALD),
        "active-loans" => Style::default().fg(AMBER),
        "interest-earned" => Style::default().fg(RED),
        "value" => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        "chart-container" | "recent-activity" => Style::default().fg(Color::Cyan),
        "activity-table" => Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        "status-badge" => Style::default().add_modifier(Modifier::BOLD),
        "status-deposit" => Style::default().fg(Color::Black).bg(EMERALD),
        "status-loan" => Style::default().fg(Color::White).bg(INDIGO),
        "status-withdrawal" => Style::default().fg(Color::White).bg(RED),
        // `collapsed` changes geometry only
        _ => Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Later classes win over earlier ones for the same attribute.
    fn test_classes_patch_left_to_right() {
        let style = style_for("nav-item active");
        assert_eq!(style.fg, Some(Color::White));
        assert_eq!(style.bg, Some(INDIGO));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_status_badges_have_distinct_backgrounds() {
        let deposit = style_for("status-badge status-deposit");
        let loan = style_for("status-badge status-loan");
        let withdrawal = style_for("status-badge status-withdrawal");
        assert_eq!(deposit.bg, Some(EMERALD));
        assert_eq!(loan.bg, Some(INDIGO));
        assert_eq!(withdrawal.bg, Some(RED));
    }

    #[test]
    fn test_unknown_classes_are_ignored() {
        assert_eq!(style_for("no-such-class"), Style::default());
        assert_eq!(style_for("sidebar collapsed"), style_for("sidebar"));
        assert_eq!(style_for(""), Style::default());
    }
}
