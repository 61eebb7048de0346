//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod activity;
pub mod charts;
pub mod footer;
pub mod header;
pub mod sidebar;
pub mod summary_cards;
