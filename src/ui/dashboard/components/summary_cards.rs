//! Dashboard summary cards
//!
//! Four fixed metric tiles: savings, members, loans and interest

use super::super::state::DashboardState;
use super::super::theme::{border_style, style_for};
use super::super::utils::format_value;
use crate::data::SummaryMetrics;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// One metric tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: u64,
    pub icon: &'static str,
    pub icon_class: &'static str,
    pub format_as_currency: bool,
}

impl SummaryCard {
    /// `Ksh 1,250,000` for currency cards, `78` otherwise.
    pub fn display_value(&self) -> String {
        format_value(self.value, self.format_as_currency)
    }
}

/// The four cards, in display order.
pub fn summary_cards(summary: &SummaryMetrics) -> [SummaryCard; 4] {
    [
        SummaryCard {
            title: "Total Savings",
            value: summary.total_savings,
            icon: "▲",
            icon_class: "total-savings",
            format_as_currency: true,
        },
        SummaryCard {
            title: "Total Members",
            value: summary.total_members,
            icon: "◉",
            icon_class: "total-members",
            format_as_currency: false,
        },
        SummaryCard {
            title: "Active Loans",
            value: summary.active_loans,
            icon: "▤",
            icon_class: "active-loans",
            format_as_currency: false,
        },
        SummaryCard {
            title: "Interest Earned",
            value: summary.interest_earned,
            icon: "%",
            icon_class: "interest-earned",
            format_as_currency: true,
        },
    ]
}

pub fn render_summary_cards(f: &mut Frame, areas: &[Rect; 4], state: &DashboardState) {
    for (card, area) in summary_cards(&state.data.summary).iter().zip(areas) {
        render_summary_card(f, *area, card);
    }
}

fn render_summary_card(f: &mut Frame, area: Rect, card: &SummaryCard) {
    let icon_classes = format!("card-icon {}", card.icon_class);
    let lines = vec![
        Line::from(vec![
            Span::styled(card.icon, style_for(&icon_classes)),
            Span::raw(" "),
            Span::styled(card.title, style_for("summary-card")),
        ]),
        Line::from(Span::styled(card.display_value(), style_for("value"))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style().patch(style_for(card.icon_class)));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
