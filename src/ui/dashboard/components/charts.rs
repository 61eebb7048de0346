//! Dashboard chart components
//!
//! Grouped bar chart of the monthly series and a pie chart of the savings
//! distribution. Both draw the configured values as given.

use super::super::state::DashboardState;
use super::super::theme::{border_style, style_for};
use super::super::utils::{compact_amount, hex_color};
use crate::data::{BarChartData, PieChartData};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Painter, Shape};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph};
use std::f64::consts::TAU;

pub const BAR_CHART_TITLE: &str = "Monthly Overview";
pub const PIE_CHART_TITLE: &str = "Savings Distribution";

const BAR_GAP: u16 = 1;
const GROUP_GAP: u16 = 2;
const PIE_LEGEND_WIDTH: u16 = 20;

/// Per-month values in dataset order, exactly as configured.
pub fn grouped_values(chart: &BarChartData) -> Vec<(&'static str, Vec<u64>)> {
    chart
        .labels
        .iter()
        .enumerate()
        .map(|(month, label)| {
            let values = chart
                .datasets
                .iter()
                .map(|dataset| dataset.data.get(month).copied().unwrap_or_default())
                .collect();
            (*label, values)
        })
        .collect()
}

/// Widest bar that lets every group fit in `width` columns.
fn bar_width(chart: &BarChartData, width: u16) -> u16 {
    let groups = chart.labels.len().max(1) as u16;
    let bars = chart.datasets.len().max(1) as u16;
    let per_group = width / groups;
    let spacing = GROUP_GAP + BAR_GAP * (bars - 1);
    (per_group.saturating_sub(spacing) / bars).max(1)
}

pub fn render_bar_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chart = &state.data.bar_chart;
    let block = panel_block(BAR_CHART_TITLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(inner);

    // Legend on top
    let legend: Vec<Span> = chart
        .datasets
        .iter()
        .flat_map(|dataset| {
            [
                Span::styled("■ ", Style::default().fg(hex_color(dataset.color))),
                Span::raw(format!("{}   ", dataset.label)),
            ]
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(legend)).alignment(Alignment::Center),
        sections[0],
    );

    let mut bar_chart = BarChart::default()
        .bar_width(bar_width(chart, sections[1].width))
        .bar_gap(BAR_GAP)
        .group_gap(GROUP_GAP)
        .value_style(Style::default().fg(Color::White))
        .label_style(Style::default().fg(Color::Gray));
    for (label, values) in grouped_values(chart) {
        let bars: Vec<Bar> = values
            .iter()
            .zip(chart.datasets)
            .map(|(value, dataset)| {
                let color = hex_color(dataset.color);
                Bar::default()
                    .value(*value)
                    .text_value(compact_amount(*value))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Color::White).bg(color))
            })
            .collect();
        bar_chart = bar_chart.data(BarGroup::default().label(Line::from(label)).bars(&bars));
    }
    f.render_widget(bar_chart, sections[1]);
}

/// Pie slices starting at 12 o'clock, running clockwise.
#[derive(Debug, Clone)]
pub struct PieChart {
    /// Cumulative end of each slice as a fraction of the full turn.
    slice_ends: Vec<f64>,
    colors: Vec<Color>,
}

impl PieChart {
    pub fn new(chart: &PieChartData) -> Self {
        let total: u64 = chart.data.iter().sum();
        let mut running = 0u64;
        let slice_ends = chart
            .data
            .iter()
            .map(|share| {
                running += share;
                if total == 0 {
                    0.0
                } else {
                    running as f64 / total as f64
                }
            })
            .collect();
        let colors = chart.colors.iter().map(|hex| hex_color(hex)).collect();
        Self { slice_ends, colors }
    }

    /// Slice under the given fraction of a full clockwise turn.
    pub fn slice_at(&self, fraction: f64) -> Option<usize> {
        self.slice_ends.iter().position(|end| fraction < *end)
    }
}

impl Shape for PieChart {
    fn draw(&self, painter: &mut Painter) {
        const RADIAL_STEPS: usize = 60;
        for ring in 1..=RADIAL_STEPS {
            let radius = ring as f64 / RADIAL_STEPS as f64;
            let angular_steps = (radius * 360.0).ceil().max(8.0) as usize;
            for step in 0..angular_steps {
                let fraction = step as f64 / angular_steps as f64;
                let Some(slice) = self.slice_at(fraction) else {
                    continue;
                };
                // Clockwise from the top: x = sin, y = cos.
                let angle = fraction * TAU;
                let (x, y) = (radius * angle.sin(), radius * angle.cos());
                if let Some((px, py)) = painter.get_point(x, y) {
                    let color = self.colors.get(slice).copied().unwrap_or(Color::Gray);
                    painter.paint(px, py, color);
                }
            }
        }
    }
}

pub fn render_pie_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chart = &state.data.pie_chart;
    let block = panel_block(PIE_CHART_TITLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(PIE_LEGEND_WIDTH)])
        .split(inner);

    // Braille dots are 2 wide and 4 tall per cell; widen the x range so the
    // circle stays round.
    let canvas_area = sections[0];
    let aspect = if canvas_area.is_empty() {
        1.0
    } else {
        (canvas_area.width as f64 * 2.0) / (canvas_area.height as f64 * 4.0)
    };
    let x_range = aspect.max(1.0);
    let y_range = (1.0 / aspect).max(1.0);
    let pie = PieChart::new(chart);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-x_range, x_range])
        .y_bounds([-y_range, y_range])
        .paint(|ctx| ctx.draw(&pie));
    f.render_widget(canvas, canvas_area);

    let legend: Vec<Line> = chart
        .labels
        .iter()
        .zip(chart.data)
        .zip(chart.colors)
        .map(|((label, share), hex)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(hex_color(hex))),
                Span::raw(format!("{:<12}", label)),
                Span::styled(format!("{:>3}", share), Style::default().fg(Color::White)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend), sections[1]);
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(title, style_for("chart-container")))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BAR_CHART, PIE_CHART};

    #[test]
    // Column-wise regrouping keeps every dataset value untouched.
    fn test_grouped_values_are_unmodified() {
        let groups = grouped_values(&BAR_CHART);
        assert_eq!(groups.len(), 6);
        assert_eq!(groups[0], ("Feb", vec![65000, 28000]));
        assert_eq!(groups[5], ("Jul", vec![95000, 27000]));

        for (dataset_index, dataset) in BAR_CHART.datasets.iter().enumerate() {
            let column: Vec<u64> = groups
                .iter()
                .map(|(_, values)| values[dataset_index])
                .collect();
            assert_eq!(column, dataset.data);
        }
    }

    #[test]
    fn test_bar_width_fits_groups() {
        // 6 groups of 2 bars: per group 2 * width + 1 gap + 2 group gap.
        assert_eq!(bar_width(&BAR_CHART, 90), 6);
        assert_eq!(bar_width(&BAR_CHART, 10), 1);
    }

    #[test]
    // 30/25/15/10/20 out of 100: slice boundaries at 0.30, 0.55, 0.70, 0.80, 1.0.
    fn test_pie_slices_follow_shares() {
        let pie = PieChart::new(&PIE_CHART);
        assert_eq!(pie.slice_at(0.0), Some(0));
        assert_eq!(pie.slice_at(0.29), Some(0));
        assert_eq!(pie.slice_at(0.31), Some(1));
        assert_eq!(pie.slice_at(0.60), Some(2));
        assert_eq!(pie.slice_at(0.75), Some(3));
        assert_eq!(pie.slice_at(0.99), Some(4));
        assert_eq!(pie.slice_at(1.0), None);
    }

    #[test]
    fn test_pie_colors_follow_config() {
        let pie = PieChart::new(&PIE_CHART);
        assert_eq!(pie.colors[0], Color::Rgb(0x4F, 0x46, 0xE5));
        assert_eq!(pie.colors[4], Color::Rgb(0x6B, 0x72, 0x80));
    }
}
