//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::config::Config;
use crate::consts::cli_consts::tick_rate;
use crate::ui::dashboard::{ClickTarget, DashboardLayout, DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::Backend};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub sidebar_collapsed: bool,
    pub mobile_breakpoint: u16,
}

impl UIConfig {
    pub fn new(with_background_color: bool, sidebar_collapsed: bool, mobile_breakpoint: u16) -> Self {
        Self {
            with_background_color,
            sidebar_collapsed,
            mobile_breakpoint,
        }
    }
}

impl From<&Config> for UIConfig {
    fn from(config: &Config) -> Self {
        Self::new(
            config.with_background_color,
            config.sidebar_collapsed,
            config.mobile_breakpoint,
        )
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The dashboard being displayed.
    state: DashboardState,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(ui_config: UIConfig) -> Self {
        Self {
            state: DashboardState::new(&ui_config),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Routes one terminal event to the dashboard. Returns `true` when the
    /// user asked to quit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    return false;
                }
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => return true,
                    KeyCode::Char('c') | KeyCode::Char('[') => self.state.toggle_sidebar(),
                    KeyCode::Char('m') => self.state.toggle_mobile_sidebar(),
                    _ => {}
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    self.handle_click(mouse.column, mouse.row);
                }
            }
            Event::Resize(width, height) => self.state.handle_resize(width, height),
            _ => {}
        }
        false
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let (width, height) = self.state.viewport();
        let layout = DashboardLayout::compute(Rect::new(0, 0, width, height), &self.state);
        match layout.hit_test(column, row) {
            Some(ClickTarget::SidebarToggle) => self.state.toggle_sidebar(),
            Some(ClickTarget::MobileMenuButton) => self.state.toggle_mobile_sidebar(),
            None => {}
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
///
/// Resize events are observed only while this loop runs.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let size = terminal.size()?;
    app.state.handle_resize(size.width, size.height);
    log::info!("Dashboard started at {}x{}", size.width, size.height);

    // UI event loop
    loop {
        terminal.draw(|f| render_dashboard(f, app.state()))?;

        if event::poll(tick_rate())? && app.handle_event(event::read()?) {
            log::info!("Dashboard closed");
            return Ok(());
        }
    }
}
