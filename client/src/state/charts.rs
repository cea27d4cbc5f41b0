//! Pre-canned analytics charts.
//!
//! Both charts are fixed declarations: labels and series are constants with
//! no binding to the penalty dataset.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Doughnut,
}

/// One data series with its styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub data: &'static [f64],
    /// Line stroke, or one border per doughnut segment.
    pub border_colors: &'static [&'static str],
    /// Area fill, or one fill per doughnut segment.
    pub background_colors: &'static [&'static str],
    pub border_width: f64,
    /// Curve smoothing for line charts; 0 draws straight segments.
    pub tension: f64,
    pub fill: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSpec {
    pub id: &'static str,
    pub kind: ChartKind,
    pub title: &'static str,
    pub labels: &'static [&'static str],
    pub series: Series,
    pub legend_top: bool,
}

pub const VIOLATIONS_OVER_TIME: ChartSpec = ChartSpec {
    id: "violations-chart",
    kind: ChartKind::Line,
    title: "Violations Over Time",
    labels: &["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct"],
    series: Series {
        label: "Violations",
        data: &[65.0, 59.0, 80.0, 81.0, 56.0, 55.0, 40.0, 45.0, 60.0, 75.0],
        border_colors: &["#4a6cf7"],
        background_colors: &["rgba(74, 108, 247, 0.1)"],
        border_width: 3.0,
        tension: 0.4,
        fill: true,
    },
    legend_top: true,
};

pub const VIOLATION_TYPES: ChartSpec = ChartSpec {
    id: "violation-types-chart",
    kind: ChartKind::Doughnut,
    title: "Violation Types Distribution",
    labels: &["Minor Violations", "Major Violations"],
    series: Series {
        label: "Violation Types",
        data: &[65.0, 35.0],
        border_colors: &["rgba(74, 108, 247, 1)", "rgba(220, 53, 69, 1)"],
        background_colors: &["rgba(74, 108, 247, 0.7)", "rgba(220, 53, 69, 0.7)"],
        border_width: 1.0,
        tension: 0.0,
        fill: true,
    },
    legend_top: true,
};

pub const DASHBOARD_CHARTS: [ChartSpec; 2] = [VIOLATIONS_OVER_TIME, VIOLATION_TYPES];

impl ChartSpec {
    /// Legend entries: label and swatch color.
    #[must_use]
    pub fn legend(&self) -> Vec<(&'static str, &'static str)> {
        match self.kind {
            ChartKind::Line => vec![(self.series.label, self.series.border_colors.first().copied().unwrap_or("#000"))],
            ChartKind::Doughnut => self
                .labels
                .iter()
                .enumerate()
                .map(|(i, label)| (*label, color_at(self.series.background_colors, i)))
                .collect(),
        }
    }
}

/// Color for item `i`, cycling through `colors`.
#[must_use]
pub fn color_at(colors: &[&'static str], i: usize) -> &'static str {
    if colors.is_empty() { "#000" } else { colors[i % colors.len()] }
}
