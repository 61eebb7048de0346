pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Geometry and timing constants for the dashboard screen, organized by
    //! functional area.

    use std::time::Duration;

    /// Brand shown in the sidebar header and headless output.
    pub const BRAND_NAME: &str = "Bondemala";

    /// Prefix placed before currency-formatted values.
    pub const CURRENCY_PREFIX: &str = "Ksh";

    // =============================================================================
    // EVENT LOOP
    // =============================================================================

    /// How long the UI loop waits for input before redrawing (milliseconds)
    pub const TICK_RATE_MS: u64 = 250;

    /// Helper function to get the input poll timeout
    pub const fn tick_rate() -> Duration {
        Duration::from_millis(TICK_RATE_MS)
    }

    // =============================================================================
    // LAYOUT
    // =============================================================================

    pub mod layout {
        /// Terminal width (columns) at or below which the mobile layout is used.
        /// Widths strictly greater than this force the mobile sidebar closed.
        pub const DEFAULT_MOBILE_BREAKPOINT: u16 = 100;

        /// Sidebar width when expanded, including its right border.
        pub const SIDEBAR_WIDTH: u16 = 24;

        /// Sidebar width when collapsed to icons only.
        pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 8;

        /// Rows taken by the sidebar brand block.
        pub const SIDEBAR_HEADER_HEIGHT: u16 = 3;

        /// Rows taken by the sidebar toggle control.
        pub const SIDEBAR_FOOTER_HEIGHT: u16 = 3;

        pub const HEADER_HEIGHT: u16 = 3;

        /// Height of one row of summary cards.
        pub const CARD_HEIGHT: u16 = 4;

        /// Five records, a header row, its bottom margin and the borders.
        pub const ACTIVITY_HEIGHT: u16 = 9;

        pub const FOOTER_HEIGHT: u16 = 2;

        /// Columns reserved for the mobile menu button in the header.
        pub const MENU_BUTTON_WIDTH: u16 = 5;

        /// Columns reserved for the user profile in the header.
        pub const PROFILE_WIDTH: u16 = 12;
    }
}
