use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::{annotation_color, diverging_color, SeriesColors};
use crate::router::Fragment;
use crate::view::spec::{
    ChartSpec, GroupedBarSpec, HeatmapSpec, HorizontalBarSpec, LabeledBarSpec, ScatterSpec,
};

// ---------------------------------------------------------------------------
// Fragment → central panel
// ---------------------------------------------------------------------------

/// Render a routed fragment into the display region.
pub fn fragment(ui: &mut Ui, fragment: &Fragment) {
    match fragment {
        Fragment::Chart(spec) => chart(ui, spec),
        Fragment::Error(msg) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label(RichText::new(msg).color(Color32::RED).heading());
            });
        }
        // Unknown tab: an intentionally blank region.
        Fragment::Empty => {}
    }
}

fn chart(ui: &mut Ui, spec: &ChartSpec) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(spec.title());
    });
    ui.add_space(4.0);

    match spec {
        ChartSpec::HorizontalBar(s) => horizontal_bar(ui, s),
        ChartSpec::Heatmap(s) => heatmap(ui, s),
        ChartSpec::GroupedBar(s) => grouped_bar(ui, s),
        ChartSpec::Scatter(s) => scatter(ui, s),
        ChartSpec::LabeledBar(s) => labeled_bar(ui, s),
    }
}

/// Axis formatter mapping integer grid positions to category labels.
fn category_formatter(
    labels: Vec<String>,
) -> impl Fn(egui_plot::GridMark, &std::ops::RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Tab 1: horizontal bars, colored by ranking group
// ---------------------------------------------------------------------------

fn horizontal_bar(ui: &mut Ui, spec: &HorizontalBarSpec) {
    // One BarChart per series so the legend carries the group colors.
    let mut series_names: Vec<String> = Vec::new();
    for bar in &spec.bars {
        if !series_names.contains(&bar.series) {
            series_names.push(bar.series.clone());
        }
    }
    let colors = SeriesColors::new(&series_names);
    let countries: Vec<String> = spec.bars.iter().map(|b| b.category.clone()).collect();

    let mut plot = Plot::new("horizontal_bar")
        .x_axis_label(&spec.x_label)
        .y_axis_label(&spec.y_label)
        .y_axis_formatter(category_formatter(countries))
        .height(spec.height);
    if spec.show_legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for name in &series_names {
            let bars: Vec<Bar> = spec
                .bars
                .iter()
                .enumerate()
                .filter(|(_, b)| &b.series == name)
                .map(|(row, b)| {
                    Bar::new(row as f64, b.value)
                        .width(0.6)
                        .name(&b.category)
                        .fill(colors.color_for(name))
                })
                .collect();
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .horizontal()
                    .name(name)
                    .color(colors.color_for(name)),
            );
        }
    });
}

// ---------------------------------------------------------------------------
// Tab 2: annotated heatmap on the diverging scale
// ---------------------------------------------------------------------------

fn heatmap(ui: &mut Ui, spec: &HeatmapSpec) {
    let n = spec.labels.len();
    // Row 0 at the top; cells are unit squares centered on integer coords.
    let row_y = |i: usize| (n - 1 - i) as f64;

    let x_labels = spec.labels.clone();
    let mut y_labels = spec.labels.clone();
    y_labels.reverse();

    Plot::new("correlation_heatmap")
        .x_axis_formatter(category_formatter(x_labels))
        .y_axis_formatter(category_formatter(y_labels))
        .show_grid(false)
        .data_aspect(1.0)
        .height(spec.height)
        .show(ui, |plot_ui| {
            for i in 0..n {
                for j in 0..n {
                    let value = spec.values[i][j];
                    let cx = j as f64;
                    let cy = row_y(i);
                    let corners: PlotPoints = vec![
                        [cx - 0.5, cy - 0.5],
                        [cx + 0.5, cy - 0.5],
                        [cx + 0.5, cy + 0.5],
                        [cx - 0.5, cy + 0.5],
                    ]
                    .into();
                    let fill = diverging_color(value, spec.scale_min, spec.scale_max);
                    plot_ui.polygon(
                        Polygon::new(corners)
                            .fill_color(fill)
                            .stroke(Stroke::new(1.0, Color32::from_gray(60))),
                    );
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(cx, cy),
                            RichText::new(&spec.annotations[i][j]).size(10.0),
                        )
                        .color(annotation_color(value, spec.scale_min, spec.scale_max))
                        .anchor(Align2::CENTER_CENTER),
                    );
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Tab 3: grouped vertical bars, one color per metric
// ---------------------------------------------------------------------------

fn grouped_bar(ui: &mut Ui, spec: &GroupedBarSpec) {
    let series_names: Vec<String> = spec.series.iter().map(|s| s.name.clone()).collect();
    let colors = SeriesColors::new(&series_names);

    let n_series = spec.series.len().max(1);
    let group_width = 0.8;
    let bar_width = group_width / n_series as f64;

    // egui cannot rotate axis tick text, so the requested tick angle is
    // approximated by breaking long category names across lines.
    let categories: Vec<String> = spec
        .categories
        .iter()
        .map(|c| c.replace(" and ", " &\n").replace(" - ", "\n"))
        .collect();

    Plot::new("grouped_bar")
        .legend(Legend::default())
        .x_axis_label(&spec.x_label)
        .y_axis_label(&spec.y_label)
        .x_axis_formatter(category_formatter(categories))
        .height(spec.height)
        .show(ui, |plot_ui| {
            for (si, series) in spec.series.iter().enumerate() {
                let offset =
                    (si as f64 - (n_series as f64 - 1.0) / 2.0) * bar_width;
                let bars: Vec<Bar> = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(ci, &v)| {
                        Bar::new(ci as f64 + offset, v)
                            .width(bar_width * 0.9)
                            .name(&spec.categories[ci])
                            .fill(colors.color_for(&series.name))
                    })
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(&series.name)
                        .color(colors.color_for(&series.name)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Tab 4: scatter, one colored series per region
// ---------------------------------------------------------------------------

fn scatter(ui: &mut Ui, spec: &ScatterSpec) {
    let region_names: Vec<String> = spec.series.iter().map(|s| s.name.clone()).collect();
    let colors = SeriesColors::new(&region_names);

    let mut plot = Plot::new("freedom_scatter")
        .x_axis_label(&spec.x_label)
        .y_axis_label(&spec.y_label)
        .height(spec.height);
    if spec.show_legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for series in &spec.series {
            let points: PlotPoints = series.points.iter().map(|p| [p.x, p.y]).collect();
            plot_ui.points(
                Points::new(points)
                    .radius(3.0)
                    .name(&series.name)
                    .color(colors.color_for(&series.name)),
            );
        }

        // Hover: annotate the nearest point with its country name.
        if let Some(pointer) = plot_ui.pointer_coordinate() {
            let bounds = plot_ui.plot_bounds();
            let mut best: Option<(&crate::view::spec::ScatterMark, f64)> = None;
            for series in &spec.series {
                for mark in &series.points {
                    let dx = (mark.x - pointer.x) / bounds.width().max(f64::EPSILON);
                    let dy = (mark.y - pointer.y) / bounds.height().max(f64::EPSILON);
                    let d2 = dx * dx + dy * dy;
                    if best.map_or(true, |(_, b)| d2 < b) {
                        best = Some((mark, d2));
                    }
                }
            }
            if let Some((mark, d2)) = best {
                if d2 < 0.0004 {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(mark.x, mark.y),
                            RichText::new(&mark.hover).strong(),
                        )
                        .anchor(Align2::LEFT_BOTTOM),
                    );
                }
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Tab 5: bars labeled with the leading country
// ---------------------------------------------------------------------------

fn labeled_bar(ui: &mut Ui, spec: &LabeledBarSpec) {
    let labels: Vec<String> = spec.bars.iter().map(|b| b.label.clone()).collect();
    let colors = SeriesColors::new(&labels);
    let categories: Vec<String> = spec.bars.iter().map(|b| b.category.clone()).collect();

    let mut plot = Plot::new("factor_leaders")
        .x_axis_label(&spec.x_label)
        .y_axis_label(&spec.y_label)
        .x_axis_formatter(category_formatter(categories))
        .height(spec.height);
    if spec.show_legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for (i, bar) in spec.bars.iter().enumerate() {
            plot_ui.bar_chart(BarChart::new(vec![
                Bar::new(i as f64, bar.value)
                    .width(0.6)
                    .name(&bar.label)
                    .fill(colors.color_for(&bar.label)),
            ]));
            plot_ui.text(
                Text::new(
                    PlotPoint::new(i as f64, bar.value),
                    RichText::new(&bar.label).size(11.0),
                )
                .anchor(Align2::CENTER_BOTTOM),
            );
        }
    });
}
