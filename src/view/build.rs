//! Builders mapping each derived view to its chart specification.
//!
//! Encodings (titles, axis bindings, heights, legend and tick options)
//! reproduce the original dashboard's five figures.

use crate::data::aggregate::{
    CorrelationMatrix, FactorLeader, RankedCountry, RegionalAverage, ScatterPoint,
};
use crate::data::model::Factor;

use super::spec::{
    BarSeries, CategoryBar, ChartSpec, GroupedBarSpec, HeatmapSpec, HorizontalBarSpec,
    LabeledBar, LabeledBarSpec, ScatterMark, ScatterSeries, ScatterSpec, CHART_HEIGHT,
};

/// Tab 1: horizontal bars of the top/bottom ranking, colored by group.
pub fn top_bottom_chart(rows: &[RankedCountry], n: usize) -> ChartSpec {
    let mut bars: Vec<CategoryBar> = rows
        .iter()
        .map(|row| CategoryBar {
            category: row.country.clone(),
            value: row.score,
            series: row.group.label(n),
        })
        .collect();
    // Category rows run bottom-to-top by score ('total ascending').
    bars.sort_by(|a, b| a.value.total_cmp(&b.value));

    ChartSpec::HorizontalBar(HorizontalBarSpec {
        title: format!("Top {n} Happiest vs. Least Happy Countries"),
        x_label: Factor::HappinessScore.label().to_string(),
        y_label: "Country".to_string(),
        bars,
        show_legend: true,
        left_margin: 150.0,
        height: CHART_HEIGHT,
    })
}

/// Tab 2: annotated correlation heatmap on a fixed [-1, 1] diverging scale.
pub fn correlation_chart(matrix: &CorrelationMatrix) -> ChartSpec {
    let annotations = (0..matrix.size())
        .map(|i| {
            (0..matrix.size())
                .map(|j| format!("{:.2}", matrix.display_value(i, j)))
                .collect()
        })
        .collect();

    ChartSpec::Heatmap(HeatmapSpec {
        title: "Correlation Heatmap: Happiness Score & Contributing Factors".to_string(),
        labels: matrix.factors.iter().map(|f| f.short_label().to_string()).collect(),
        values: matrix.values.clone(),
        annotations,
        scale_min: -1.0,
        scale_max: 1.0,
        height: CHART_HEIGHT,
    })
}

/// Tab 3: per-region grouped bars for the two compared metrics.
pub fn regional_chart(averages: &[RegionalAverage]) -> ChartSpec {
    ChartSpec::GroupedBar(GroupedBarSpec {
        title: "Average Happiness Score and Trust by Region".to_string(),
        x_label: "Region".to_string(),
        y_label: "Score".to_string(),
        legend_title: "Metric".to_string(),
        categories: averages.iter().map(|a| a.region.clone()).collect(),
        series: vec![
            BarSeries {
                name: Factor::HappinessScore.label().to_string(),
                values: averages.iter().map(|a| a.happiness).collect(),
            },
            BarSeries {
                name: Factor::Trust.label().to_string(),
                values: averages.iter().map(|a| a.trust).collect(),
            },
        ],
        tick_angle: 45.0,
        height: CHART_HEIGHT,
    })
}

/// Tab 4: freedom vs. happiness scatter, one series per region, country on
/// hover.  Series keep the regions' first-appearance order.
pub fn scatter_chart(points: &[ScatterPoint]) -> ChartSpec {
    let mut series: Vec<ScatterSeries> = Vec::new();
    for point in points {
        let mark = ScatterMark {
            x: point.freedom,
            y: point.score,
            hover: point.country.clone(),
        };
        match series.iter_mut().find(|s| s.name == point.region) {
            Some(s) => s.points.push(mark),
            None => series.push(ScatterSeries {
                name: point.region.clone(),
                points: vec![mark],
            }),
        }
    }

    ChartSpec::Scatter(ScatterSpec {
        title: "Freedom vs. Happiness Score".to_string(),
        x_label: Factor::Freedom.label().to_string(),
        y_label: Factor::HappinessScore.label().to_string(),
        series,
        show_legend: true,
        height: CHART_HEIGHT,
    })
}

/// Tab 5: one bar per contributing factor, labeled with the leading country.
pub fn leaders_chart(leaders: &[FactorLeader]) -> ChartSpec {
    ChartSpec::LabeledBar(LabeledBarSpec {
        title: "Top Countries by Individual Happiness Factors".to_string(),
        x_label: "Factor".to_string(),
        y_label: "Score".to_string(),
        bars: leaders
            .iter()
            .map(|leader| LabeledBar {
                category: leader.factor.short_label().to_string(),
                value: leader.value,
                label: leader.country.clone(),
            })
            .collect(),
        tick_angle: 45.0,
        show_legend: false,
        height: CHART_HEIGHT,
    })
}
