//! Declarative chart specifications.
//!
//! A [`ChartSpec`] is an immutable description of one chart's visual
//! encoding (type, axis bindings, series, display options), independent of
//! whatever surface renders it.  Builders in [`super::build`] produce these
//! from derived views; `crate::ui::render` consumes them.  Specs are
//! `Serialize` so they can also be exported for other rendering surfaces.

use serde::Serialize;

/// Default figure height, matching the original dashboard.
pub const CHART_HEIGHT: f32 = 600.0;

/// One chart, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartSpec {
    HorizontalBar(HorizontalBarSpec),
    Heatmap(HeatmapSpec),
    GroupedBar(GroupedBarSpec),
    Scatter(ScatterSpec),
    LabeledBar(LabeledBarSpec),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::HorizontalBar(s) => &s.title,
            ChartSpec::Heatmap(s) => &s.title,
            ChartSpec::GroupedBar(s) => &s.title,
            ChartSpec::Scatter(s) => &s.title,
            ChartSpec::LabeledBar(s) => &s.title,
        }
    }
}

/// Horizontal bars, one category row per bar, colored by series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HorizontalBarSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Bottom-to-top row order (ascending by value).
    pub bars: Vec<CategoryBar>,
    pub show_legend: bool,
    /// Extra left margin so long category labels fit.
    pub left_margin: f32,
    pub height: f32,
}

/// One bar of a categorical bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBar {
    pub category: String,
    pub value: f64,
    /// Series (legend entry) this bar belongs to.
    pub series: String,
}

/// Square matrix heatmap with per-cell annotations and a diverging scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapSpec {
    pub title: String,
    /// Row and column labels (the matrix is indexed identically on both axes).
    pub labels: Vec<String>,
    /// Full-precision cell values, `values[row][col]`.
    pub values: Vec<Vec<f64>>,
    /// Text drawn in each cell (values rounded for display).
    pub annotations: Vec<Vec<String>>,
    /// Fixed color domain; values at `scale_min` map to one extreme of the
    /// diverging scale, `scale_max` to the other.
    pub scale_min: f64,
    pub scale_max: f64,
    pub height: f32,
}

/// Vertical bars grouped side by side per category, one color per series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedBarSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    /// Degrees to rotate x tick labels.
    pub tick_angle: f32,
    pub height: f32,
}

/// One series of a grouped bar chart; `values` aligns with `categories`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Scatter plot with one colored series per group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
    pub show_legend: bool,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterMark>,
}

/// One scatter point, with hover text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMark {
    pub x: f64,
    pub y: f64,
    pub hover: String,
}

/// Vertical bars with a text label drawn on each bar, one color per bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledBarSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<LabeledBar>,
    pub tick_angle: f32,
    pub show_legend: bool,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledBar {
    pub category: String,
    pub value: f64,
    /// Text drawn on the bar (and its color key).
    pub label: String,
}
