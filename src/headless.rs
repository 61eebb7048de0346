//! Headless output of the dashboard figures
//!
//! Plain-text or JSON rendering for terminals that cannot host the
//! interactive screen, and for scripts.

use crate::consts::cli_consts::BRAND_NAME;
use crate::data::DashboardData;
use crate::error::DashboardError;
use crate::ui::dashboard::components::activity::{COLUMNS, activity_rows};
use crate::ui::dashboard::components::summary_cards::summary_cards;
use std::io::{self, Write};

/// Summary cards followed by the activity table, one line each.
pub fn write_summary<W: Write>(out: &mut W, data: &DashboardData) -> io::Result<()> {
    writeln!(out, "{} Dashboard", BRAND_NAME)?;
    writeln!(out)?;
    for card in summary_cards(&data.summary) {
        writeln!(out, "{}: {}", card.title, card.display_value())?;
    }

    writeln!(out)?;
    writeln!(out, "Recent Activity")?;
    writeln!(
        out,
        "{:<14} {:<12} {:>14} {}",
        COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3]
    )?;
    for row in activity_rows(data.recent_activities) {
        writeln!(
            out,
            "{:<14} {:<12} {:>14} {}",
            row.member, row.badge, row.amount, row.date
        )?;
    }
    out.flush()
}

/// The full static data set as pretty-printed JSON.
pub fn summary_json(data: &DashboardData) -> Result<String, DashboardError> {
    Ok(serde_json::to_string_pretty(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_text() -> String {
        let mut out = Vec::new();
        write_summary(&mut out, &DashboardData::new()).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Writer whose every write fails, like a closed pipe.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_summary_text_lists_cards() {
        let text = summary_text();
        assert!(text.starts_with("Bondemala Dashboard\n"));
        assert!(text.contains("Total Savings: Ksh 1,250,000\n"));
        assert!(text.contains("Total Members: 78\n"));
        assert!(text.contains("Active Loans: 15\n"));
        assert!(text.contains("Interest Earned: Ksh 85,000\n"));
    }

    #[test]
    // Activity lines keep the input order.
    fn test_summary_text_lists_activity_in_order() {
        let text = summary_text();
        let jane = text.find("Jane Doe").unwrap();
        let john = text.find("John Smith").unwrap();
        let chris = text.find("Chris Green").unwrap();
        assert!(jane < john && john < chris);
        assert!(text.contains("Withdrawal"));
        assert!(text.contains("50,000"));
    }

    #[test]
    fn test_write_errors_are_returned() {
        let err = write_summary(&mut ClosedPipe, &DashboardData::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_summary_json_fields() {
        let json = summary_json(&DashboardData::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["totalMembers"], 78);
        assert_eq!(value["recentActivities"].as_array().unwrap().len(), 5);
        assert_eq!(value["barChart"]["labels"][0], "Feb");
    }
}
