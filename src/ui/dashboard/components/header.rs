//! Dashboard header component
//!
//! Renders the mobile menu button, page title and user profile

use super::super::layout::header_sections;
use super::super::state::DashboardState;
use super::super::theme::{border_style, style_for};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const PAGE_TITLE: &str = "Dashboard";
pub const USER_NAME: &str = "Admin";

/// Render the header bar. The menu button only exists in the mobile layout.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let mobile = state.is_mobile();
    let (menu_area, title_area, profile_area) = header_sections(area, mobile);

    if mobile {
        let menu_button = Paragraph::new("≡")
            .alignment(Alignment::Center)
            .style(style_for("mobile-menu-btn"))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style()),
            );
        f.render_widget(menu_button, menu_area);
    }

    let title = Paragraph::new(Line::from(Span::styled(PAGE_TITLE, style_for("header"))))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick)
                .border_style(border_style()),
        );
    f.render_widget(title, centered_row(title_area));

    let profile = Paragraph::new(Line::from(vec![
        Span::styled(USER_NAME, style_for("user-profile")),
        Span::raw(" "),
        Span::styled("◯", style_for("user-profile")),
    ]))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick)
            .border_style(border_style()),
    );
    f.render_widget(profile, centered_row(profile_area));
}

/// Text on the middle row, underline on the last.
fn centered_row(area: Rect) -> Rect {
    Rect {
        y: area.y + 1u16.min(area.height),
        height: area.height.saturating_sub(1),
        ..area
    }
}
