//! Dashboard footer component
//!
//! Renders the keybinding help line

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Keybinding hint, mentioning the menu key only where the menu exists.
pub fn footer_text(state: &DashboardState) -> &'static str {
    if state.is_mobile() {
        "[Q] Quit | [M] Menu | [C] Collapse sidebar"
    } else {
        "[Q] Quit | [C] Collapse sidebar"
    }
}

pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let footer = Paragraph::new(footer_text(state))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
