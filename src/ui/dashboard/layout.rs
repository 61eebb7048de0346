//! Dashboard geometry
//!
//! The layout is a pure function of the screen area and the dashboard state.
//! The renderer draws into these rectangles and mouse clicks are hit-tested
//! against the same rectangles.

use super::state::DashboardState;
use crate::consts::cli_consts::layout::{
    ACTIVITY_HEIGHT, CARD_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, MENU_BUTTON_WIDTH, PROFILE_WIDTH,
    SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_FOOTER_HEIGHT, SIDEBAR_HEADER_HEIGHT, SIDEBAR_WIDTH,
};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Controls that react to a mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    SidebarToggle,
    MobileMenuButton,
}

/// Screen rectangles for every dashboard component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    /// Sidebar area, `None` when hidden (mobile layout, overlay closed).
    pub sidebar: Option<Rect>,
    /// The sidebar is drawn on top of the main column.
    pub sidebar_overlay: bool,
    pub header: Rect,
    /// Present only in the mobile layout.
    pub menu_button: Option<Rect>,
    pub cards: [Rect; 4],
    pub bar_chart: Rect,
    pub pie_chart: Rect,
    pub activity: Rect,
    pub footer: Rect,
}

impl DashboardLayout {
    pub fn compute(area: Rect, state: &DashboardState) -> Self {
        let mobile = state.is_mobile();

        let (sidebar, sidebar_overlay, main) = if mobile {
            let sidebar = state.mobile_sidebar_open().then(|| Rect {
                width: SIDEBAR_WIDTH.min(area.width),
                ..area
            });
            (sidebar, true, area)
        } else {
            let width = if state.sidebar_collapsed() {
                SIDEBAR_COLLAPSED_WIDTH
            } else {
                SIDEBAR_WIDTH
            };
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(width), Constraint::Fill(1)])
                .split(area);
            (Some(columns[0]), false, columns[1])
        };

        let cards_height = if mobile { CARD_HEIGHT * 2 } else { CARD_HEIGHT };
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(cards_height),
                Constraint::Fill(1),
                Constraint::Length(ACTIVITY_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(main);

        let header = main_chunks[0];
        let menu_button = if mobile {
            Some(header_sections(header, true).0)
        } else {
            None
        };

        let chart_direction = if mobile {
            Direction::Vertical
        } else {
            Direction::Horizontal
        };
        let chart_constraints = if mobile {
            [Constraint::Percentage(50), Constraint::Percentage(50)]
        } else {
            [Constraint::Percentage(60), Constraint::Percentage(40)]
        };
        let charts = Layout::default()
            .direction(chart_direction)
            .constraints(chart_constraints)
            .split(main_chunks[2]);

        Self {
            sidebar,
            sidebar_overlay,
            header,
            menu_button,
            cards: card_grid(main_chunks[1], mobile),
            bar_chart: charts[0],
            pie_chart: charts[1],
            activity: main_chunks[3],
            footer: main_chunks[4],
        }
    }

    /// Area of the sidebar's collapse toggle, when the sidebar is visible.
    pub fn sidebar_toggle(&self) -> Option<Rect> {
        self.sidebar
            .map(|area| sidebar_sections(sidebar_content(area))[2])
    }

    /// Which control, if any, sits under the given cell.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);
        if self
            .sidebar_toggle()
            .is_some_and(|toggle| toggle.contains(position))
        {
            return Some(ClickTarget::SidebarToggle);
        }
        // An open overlay covers the header underneath it.
        if self.sidebar_overlay && self.sidebar.is_some_and(|area| area.contains(position)) {
            return None;
        }
        if self
            .menu_button
            .is_some_and(|button| button.contains(position))
        {
            return Some(ClickTarget::MobileMenuButton);
        }
        None
    }
}

/// Sidebar area inside its right border.
pub fn sidebar_content(area: Rect) -> Rect {
    Rect {
        width: area.width.saturating_sub(1),
        ..area
    }
}

/// Brand, navigation list and toggle control, top to bottom.
pub fn sidebar_sections(area: Rect) -> [Rect; 3] {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SIDEBAR_HEADER_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(SIDEBAR_FOOTER_HEIGHT),
        ])
        .split(area);
    [sections[0], sections[1], sections[2]]
}

/// Menu button, title and user profile, left to right. The menu button has
/// zero width outside the mobile layout.
pub fn header_sections(area: Rect, mobile: bool) -> (Rect, Rect, Rect) {
    let menu_width = if mobile { MENU_BUTTON_WIDTH } else { 0 };
    let sections = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(menu_width),
            Constraint::Fill(1),
            Constraint::Length(PROFILE_WIDTH),
        ])
        .split(area);
    (sections[0], sections[1], sections[2])
}

/// Four cards in a row, or a 2x2 grid in the mobile layout.
fn card_grid(area: Rect, mobile: bool) -> [Rect; 4] {
    if mobile {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(area);
        let halves = [Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)];
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(halves)
            .split(rows[0]);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(halves)
            .split(rows[1]);
        [top[0], top[1], bottom[0], bottom[1]]
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);
        [columns[0], columns[1], columns[2], columns[3]]
    }
}
