//! Dashboard main renderer

use super::components::{activity, charts, footer, header, sidebar, summary_cards};
use super::layout::DashboardLayout;
use super::state::DashboardState;
use super::theme::BACKGROUND;
use ratatui::Frame;
use ratatui::prelude::Style;
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), f.area());
    }

    let layout = DashboardLayout::compute(f.area(), state);

    header::render_header(f, layout.header, state);
    summary_cards::render_summary_cards(f, &layout.cards, state);
    charts::render_bar_chart(f, layout.bar_chart, state);
    charts::render_pie_chart(f, layout.pie_chart, state);
    activity::render_activity_table(f, layout.activity, state);
    footer::render_footer(f, layout.footer, state);

    // Drawn last so the mobile overlay lands on top of the content.
    if let Some(area) = layout.sidebar {
        sidebar::render_sidebar(f, area, state, layout.sidebar_overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(state: &DashboardState) -> String {
        let (width, height) = state.viewport();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn state_at(width: u16, height: u16) -> DashboardState {
        let mut state = DashboardState::from_config(&Config::default());
        state.handle_resize(width, height);
        state
    }

    #[test]
    fn test_desktop_render_shows_all_panels() {
        let text = render_to_text(&state_at(140, 44));
        assert!(text.contains("Bondemala"));
        assert!(text.contains("Dashboard"));
        assert!(text.contains("Admin"));
        assert!(text.contains("Total Savings"));
        assert!(text.contains("Ksh 1,250,000"));
        assert!(text.contains("Ksh 85,000"));
        assert!(text.contains("Monthly Overview"));
        assert!(text.contains("Savings Distribution"));
        assert!(text.contains("Recent Activity"));
        assert!(text.contains("Amount (Ksh)"));
        assert!(text.contains("Chris Green"));
        assert!(text.contains("50,000"));
        assert!(text.contains("Transactions"));
        assert!(text.contains("[Q] Quit"));
    }

    #[test]
    // Collapsed sidebar shows icons only, so nav labels vanish.
    fn test_collapsed_sidebar_hides_labels() {
        let mut state = state_at(140, 44);
        state.toggle_sidebar();
        let text = render_to_text(&state);
        assert!(!text.contains("Transactions"));
        assert!(!text.contains("Bondemala"));
        assert!(text.contains("Ksh 1,250,000"));
    }

    #[test]
    // Mobile layout hides the sidebar until the menu opens it.
    fn test_mobile_sidebar_overlay() {
        let mut state = state_at(90, 50);
        let closed = render_to_text(&state);
        assert!(!closed.contains("Transactions"));
        assert!(closed.contains("≡"));
        assert!(closed.contains("[M] Menu"));

        state.toggle_mobile_sidebar();
        let open = render_to_text(&state);
        assert!(open.contains("Transactions"));
        assert!(open.contains("Bondemala"));
    }

    #[test]
    // The overlay is drawn at full width, so its toggle offers to collapse
    // even when the desktop sidebar was collapsed.
    fn test_mobile_overlay_toggle_label_ignores_collapse() {
        let mut state = state_at(90, 50);
        state.toggle_sidebar();
        state.toggle_mobile_sidebar();
        let text = render_to_text(&state);
        assert!(text.contains("Transactions"));
        assert!(text.contains("« Collapse"));
        assert!(!text.contains("»"));
    }

    #[test]
    fn test_render_without_background() {
        let mut state = DashboardState::from_config(&Config {
            with_background_color: false,
            ..Config::default()
        });
        state.handle_resize(120, 40);
        let text = render_to_text(&state);
        assert!(text.contains("Recent Activity"));
    }

    #[test]
    // A tiny terminal must not panic.
    fn test_render_tiny_terminal() {
        let text = render_to_text(&state_at(10, 5));
        assert_eq!(text.lines().count(), 5);
    }
}
