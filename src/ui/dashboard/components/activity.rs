//! Dashboard recent-activity table
//!
//! One row per activity record, in input order

use super::super::state::DashboardState;
use super::super::theme::{border_style, style_for};
use super::super::utils::{group_thousands, status_class};
use crate::data::ActivityRecord;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

pub const ACTIVITY_TITLE: &str = "Recent Activity";
pub const COLUMNS: [&str; 4] = ["Member", "Type", "Amount (Ksh)", "Date"];

/// Display values for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    pub member: &'static str,
    pub badge: String,
    /// `status-badge status-<type>`
    pub badge_classes: String,
    pub amount: String,
    pub date: &'static str,
}

impl From<&ActivityRecord> for ActivityRow {
    fn from(record: &ActivityRecord) -> Self {
        Self {
            member: record.member,
            badge: record.kind.to_string(),
            badge_classes: format!("status-badge {}", status_class(record.kind)),
            amount: group_thousands(record.amount),
            date: record.date,
        }
    }
}

pub fn activity_rows(records: &[ActivityRecord]) -> Vec<ActivityRow> {
    records.iter().map(ActivityRow::from).collect()
}

pub fn render_activity_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows: Vec<Row> = activity_rows(state.data.recent_activities)
        .into_iter()
        .map(|row| {
            let badge = Span::styled(format!(" {} ", row.badge), style_for(&row.badge_classes));
            Row::new(vec![
                Cell::from(row.member),
                Cell::from(badge),
                Cell::from(row.amount),
                Cell::from(row.date),
            ])
        })
        .collect();

    let header = Row::new(COLUMNS)
        .style(style_for("activity-table"))
        .bottom_margin(1);

    let widths = [
        Constraint::Fill(2),
        Constraint::Length(13),
        Constraint::Length(13),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .title(Span::styled(ACTIVITY_TITLE, style_for("recent-activity")))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style()),
        );
    f.render_widget(table, area);
}
