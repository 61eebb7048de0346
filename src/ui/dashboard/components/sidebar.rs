//! Dashboard sidebar component
//!
//! Renders the brand, navigation list and the collapse toggle

use super::super::layout::{sidebar_content, sidebar_sections};
use super::super::state::DashboardState;
use super::super::theme::{border_style, style_for};
use crate::consts::cli_consts::BRAND_NAME;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Render the sidebar into `area`, clearing what is beneath when it overlays.
pub fn render_sidebar(f: &mut Frame, area: Rect, state: &DashboardState, overlay: bool) {
    if overlay {
        f.render_widget(Clear, area);
    }

    let classes = state.sidebar_classes();
    // The mobile overlay is always drawn at full width.
    let icons_only = state.sidebar_collapsed() && !overlay;

    let frame_block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(border_style())
        .style(style_for(&classes));
    f.render_widget(frame_block, area);

    // Same rectangles the click hit-test uses.
    let [header_area, nav_area, footer_area] = sidebar_sections(sidebar_content(area));

    // Brand
    let mut brand = vec![Span::styled("◈", style_for("logo-icon"))];
    if !icons_only {
        brand.push(Span::raw(" "));
        brand.push(Span::styled(BRAND_NAME, style_for("logo-text")));
    }
    let brand_paragraph = Paragraph::new(Line::from(brand))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(border_style())
                .style(style_for("sidebar-header")),
        );
    f.render_widget(brand_paragraph, header_area);

    // Navigation; only the first entry is marked active.
    let nav_lines: Vec<Line> = state
        .data
        .nav_items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let item_classes = if index == 0 {
                "nav-item active"
            } else {
                "nav-item"
            };
            let text = if icons_only {
                format!(" {} ", item.icon)
            } else {
                format!(" {}  {}", item.icon, item.name)
            };
            Line::from(Span::raw(text)).style(style_for(item_classes))
        })
        .collect();
    let nav_alignment = if icons_only {
        Alignment::Center
    } else {
        Alignment::Left
    };
    f.render_widget(
        Paragraph::new(nav_lines).alignment(nav_alignment),
        nav_area,
    );

    // Collapse toggle
    let toggle = Paragraph::new(toggle_label(icons_only))
        .alignment(Alignment::Center)
        .style(style_for("toggle-btn"))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(border_style()),
        );
    f.render_widget(toggle, footer_area);
}

/// Label of the collapse toggle; follows what the sidebar actually shows.
fn toggle_label(icons_only: bool) -> &'static str {
    if icons_only { "»" } else { "« Collapse" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_matches_width() {
        assert_eq!(toggle_label(true), "»");
        assert_eq!(toggle_label(false), "« Collapse");
    }
}
