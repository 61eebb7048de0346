//! Static SACCO figures shown on the dashboard.
//!
//! Everything here is a compile-time literal. Nothing is fetched, and nothing
//! mutates these values after startup.

use serde::Serialize;

/// Headline totals for the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub total_savings: u64,
    pub total_members: u64,
    pub active_loans: u64,
    pub interest_earned: u64,
}

/// Kind of a logged transaction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, strum::Display)]
pub enum TransactionType {
    Deposit,
    Loan,
    Withdrawal,
}

/// One entry of the recent-activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: u32,
    pub member: &'static str,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: u64,
    pub date: &'static str,
}

/// One series of the grouped bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub label: &'static str,
    pub data: &'static [u64],
    /// `#RRGGBB`
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartData {
    pub labels: &'static [&'static str],
    pub datasets: &'static [BarDataset],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChartData {
    pub label: &'static str,
    pub labels: &'static [&'static str],
    pub data: &'static [u64],
    pub colors: &'static [&'static str],
}

/// Sidebar navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub icon: &'static str,
    pub name: &'static str,
}

pub const SUMMARY: SummaryMetrics = SummaryMetrics {
    total_savings: 1_250_000,
    total_members: 78,
    active_loans: 15,
    interest_earned: 85_000,
};

pub const RECENT_ACTIVITIES: [ActivityRecord; 5] = [
    ActivityRecord {
        id: 1,
        member: "Jane Doe",
        kind: TransactionType::Deposit,
        amount: 5000,
        date: "2024-07-28",
    },
    ActivityRecord {
        id: 2,
        member: "John Smith",
        kind: TransactionType::Loan,
        amount: 50000,
        date: "2024-07-27",
    },
    ActivityRecord {
        id: 3,
        member: "Peter Jones",
        kind: TransactionType::Withdrawal,
        amount: 2000,
        date: "2024-07-26",
    },
    ActivityRecord {
        id: 4,
        member: "Mary Anne",
        kind: TransactionType::Deposit,
        amount: 10000,
        date: "2024-07-25",
    },
    ActivityRecord {
        id: 5,
        member: "Chris Green",
        kind: TransactionType::Deposit,
        amount: 7500,
        date: "2024-07-25",
    },
];

pub const BAR_CHART: BarChartData = BarChartData {
    labels: &["Feb", "Mar", "Apr", "May", "Jun", "Jul"],
    datasets: &[
        BarDataset {
            label: "Savings",
            data: &[65000, 59000, 80000, 81000, 56000, 95000],
            color: "#4F46E5",
        },
        BarDataset {
            label: "Loans",
            data: &[28000, 48000, 40000, 19000, 86000, 27000],
            color: "#10B981",
        },
    ],
};

pub const PIE_CHART: PieChartData = PieChartData {
    label: "Savings Distribution",
    labels: &["Jane Doe", "John Smith", "Peter Jones", "Mary Anne", "Others"],
    data: &[30, 25, 15, 10, 20],
    colors: &["#4F46E5", "#10B981", "#F59E0B", "#EF4444", "#6B7280"],
};

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        icon: "▣",
        name: "Dashboard",
    },
    NavItem {
        icon: "◉",
        name: "Members",
    },
    NavItem {
        icon: "⇅",
        name: "Transactions",
    },
    NavItem {
        icon: "▤",
        name: "Loans",
    },
    NavItem {
        icon: "▥",
        name: "Reports",
    },
    NavItem {
        icon: "✱",
        name: "Settings",
    },
];

/// Everything the dashboard shows, bundled for the JSON summary.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub summary: SummaryMetrics,
    pub recent_activities: &'static [ActivityRecord],
    pub bar_chart: BarChartData,
    pub pie_chart: PieChartData,
    pub nav_items: &'static [NavItem],
}

impl DashboardData {
    pub fn new() -> Self {
        Self {
            summary: SUMMARY,
            recent_activities: &RECENT_ACTIVITIES,
            bar_chart: BAR_CHART,
            pie_chart: PIE_CHART,
            nav_items: &NAV_ITEMS,
        }
    }
}

impl Default for DashboardData {
    fn default() -> Self {
        Self::new()
    }
}
