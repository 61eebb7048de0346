//! Dashboard state management
//!
//! Holds the two UI flags (sidebar collapsed, mobile sidebar open) and the
//! last known terminal size. Components only ever read this.

#[cfg(test)]
use crate::config::Config;
use crate::data::DashboardData;
use crate::ui::app::UIConfig;

/// Dashboard state: UI flags plus the static figures being displayed.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Figures shown on the screen.
    pub data: DashboardData,
    /// Whether to paint the background colour.
    pub with_background_color: bool,
    /// Width at or below which the mobile layout applies.
    pub mobile_breakpoint: u16,

    /// Narrow, icon-only sidebar (desktop layout).
    sidebar_collapsed: bool,
    /// Overlay sidebar shown (mobile layout).
    mobile_sidebar_open: bool,
    /// Last observed terminal size as (width, height).
    viewport: (u16, u16),
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(ui_config: &UIConfig) -> Self {
        Self {
            data: DashboardData::new(),
            with_background_color: ui_config.with_background_color,
            mobile_breakpoint: ui_config.mobile_breakpoint,
            sidebar_collapsed: ui_config.sidebar_collapsed,
            mobile_sidebar_open: false,
            viewport: (0, 0),
        }
    }

    #[cfg(test)]
    pub fn from_config(config: &Config) -> Self {
        Self::new(&UIConfig::from(config))
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn mobile_sidebar_open(&self) -> bool {
        self.mobile_sidebar_open
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    /// Mobile layout: the viewport is at or below the breakpoint.
    pub fn is_mobile(&self) -> bool {
        self.viewport.0 <= self.mobile_breakpoint
    }

    /// Flip the collapsed flag. Called once per activation of the toggle.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        log::debug!("Sidebar collapsed: {}", self.sidebar_collapsed);
    }

    /// Flip the mobile overlay flag. Called once per activation of the menu
    /// button, which only exists in the mobile layout.
    pub fn toggle_mobile_sidebar(&mut self) {
        if !self.is_mobile() {
            log::debug!("Ignoring mobile sidebar toggle in the desktop layout");
            return;
        }
        self.mobile_sidebar_open = !self.mobile_sidebar_open;
        log::debug!("Mobile sidebar open: {}", self.mobile_sidebar_open);
    }

    /// Resize observer. Growing past the breakpoint closes the mobile
    /// sidebar; shrinking never opens it.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        if width > self.mobile_breakpoint && self.mobile_sidebar_open {
            self.mobile_sidebar_open = false;
            log::debug!(
                "Viewport {}x{} above breakpoint {}, closing mobile sidebar",
                width,
                height,
                self.mobile_breakpoint
            );
        }
    }

    /// Class list for the sidebar element, e.g. `sidebar collapsed`.
    pub fn sidebar_classes(&self) -> String {
        let mut classes = vec!["sidebar"];
        if self.sidebar_collapsed {
            classes.push("collapsed");
        }
        if self.mobile_sidebar_open {
            classes.push("open");
        }
        classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_breakpoint(breakpoint: u16) -> DashboardState {
        DashboardState::from_config(&Config {
            mobile_breakpoint: breakpoint,
            ..Config::default()
        })
    }

    #[test]
    // Each toggle flips the flag and the `collapsed` class exactly once.
    fn test_toggle_sidebar_flips_once_per_call() {
        let mut state = state_with_breakpoint(100);
        assert!(!state.sidebar_collapsed());
        assert_eq!(state.sidebar_classes(), "sidebar");

        state.toggle_sidebar();
        assert!(state.sidebar_collapsed());
        assert_eq!(state.sidebar_classes(), "sidebar collapsed");

        state.toggle_sidebar();
        assert!(!state.sidebar_collapsed());
        assert_eq!(state.sidebar_classes(), "sidebar");
    }

    #[test]
    fn test_toggle_mobile_sidebar_adds_open_class() {
        let mut state = state_with_breakpoint(100);
        state.handle_resize(80, 30);
        state.toggle_mobile_sidebar();
        assert!(state.mobile_sidebar_open());
        assert_eq!(state.sidebar_classes(), "sidebar open");
    }

    #[test]
    // Growing past the breakpoint closes the overlay regardless of its state.
    fn test_resize_above_breakpoint_closes_mobile_sidebar() {
        let mut state = state_with_breakpoint(100);
        state.handle_resize(80, 30);
        state.toggle_mobile_sidebar();
        assert!(state.mobile_sidebar_open());

        state.handle_resize(101, 30);
        assert!(!state.mobile_sidebar_open());

        state.handle_resize(150, 30);
        assert!(!state.mobile_sidebar_open());
    }

    #[test]
    // The breakpoint itself still counts as mobile, so the overlay stays open.
    fn test_resize_to_breakpoint_keeps_mobile_sidebar() {
        let mut state = state_with_breakpoint(100);
        state.handle_resize(60, 30);
        state.toggle_mobile_sidebar();

        state.handle_resize(100, 30);
        assert!(state.mobile_sidebar_open());
        assert!(state.is_mobile());
    }

    #[test]
    // Shrinking below the breakpoint never opens the overlay on its own.
    fn test_resize_below_breakpoint_does_not_open() {
        let mut state = state_with_breakpoint(100);
        state.handle_resize(160, 40);
        state.handle_resize(70, 40);
        assert!(!state.mobile_sidebar_open());
        assert!(state.is_mobile());
    }

    #[test]
    // The overlay cannot be opened while the desktop layout is showing, so a
    // later shrink does not reveal it.
    fn test_mobile_toggle_ignored_on_desktop() {
        let mut state = state_with_breakpoint(100);
        state.handle_resize(140, 40);
        state.toggle_mobile_sidebar();
        assert!(!state.mobile_sidebar_open());
        assert_eq!(state.sidebar_classes(), "sidebar");

        state.handle_resize(80, 40);
        assert!(!state.mobile_sidebar_open());
    }

    #[test]
    fn test_resize_records_viewport() {
        let mut state = state_with_breakpoint(100);
        state.handle_resize(132, 43);
        assert_eq!(state.viewport(), (132, 43));
        assert!(!state.is_mobile());
    }

    #[test]
    fn test_initial_collapse_from_config() {
        let state = DashboardState::from_config(&Config {
            sidebar_collapsed: true,
            ..Config::default()
        });
        assert!(state.sidebar_collapsed());
        assert!(!state.mobile_sidebar_open());
    }
}
