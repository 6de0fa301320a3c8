use eframe::egui::Ui;
use egui_plot::{uniform_grid_spacer, Bar, BarChart, GridMark, Legend, Plot};

use crate::data::chart::truncate_label;
use crate::data::model::ChartDataset;

/// Share of one category slot covered by its group of bars.
const GROUP_WIDTH: f64 = 0.8;

/// Widest a single bar may be drawn, in screen points.
const MAX_BAR_THICKNESS: f64 = 50.0;

// ---------------------------------------------------------------------------
// Grouped bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render `dataset` as grouped bars, one group per label.
///
/// The plot id includes the dataset version, so zoom/pan state survives
/// repaints and is reset only when the content changes.  `value_text`
/// formats the hovered bar's value.
pub fn bar_chart(ui: &mut Ui, id: &str, dataset: &ChartDataset, value_text: fn(f64) -> String) {
    let n_series = dataset.series.len();
    let axis_labels: Vec<String> = dataset.labels.iter().map(|l| truncate_label(l)).collect();

    Plot::new((id, dataset.version()))
        .legend(Legend::default())
        .include_y(0.0)
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark: GridMark, _range| category_label(&axis_labels, mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points_per_unit = plot_ui.transform().dpos_dvalue_x().abs();
            let width = bar_width(n_series, points_per_unit);

            for (k, series) in dataset.series.iter().enumerate() {
                let offset = bar_offset(k, n_series, width);

                let bars: Vec<Bar> = series
                    .numeric()
                    .enumerate()
                    .filter_map(|(i, value)| {
                        let value = value?;
                        // Full label in the bar name: the axis shows the truncated one.
                        Some(
                            Bar::new(i as f64 + offset, value)
                                .width(width)
                                .name(format!("{}\n{}", dataset.labels[i], series.name)),
                        )
                    })
                    .collect();

                let chart = BarChart::new(bars)
                    .name(&series.name)
                    .color(series.color.color)
                    .element_formatter(Box::new(move |bar: &Bar, _: &BarChart| {
                        format!("{}\n{}", bar.name, value_text(bar.value))
                    }));

                plot_ui.bar_chart(chart);
            }
        });
}

/// Width of one bar in plot units: an equal share of the group, but never
/// thicker than [`MAX_BAR_THICKNESS`] on screen.
fn bar_width(n_series: usize, points_per_unit: f64) -> f64 {
    let share = GROUP_WIDTH / n_series.max(1) as f64;
    if points_per_unit.is_finite() && points_per_unit > 0.0 {
        share.min(MAX_BAR_THICKNESS / points_per_unit)
    } else {
        share
    }
}

/// Centre of bar `k` relative to its category, keeping the group centred.
fn bar_offset(k: usize, n_series: usize, width: f64) -> f64 {
    (k as f64 + 0.5) * width - n_series as f64 * width / 2.0
}

/// Axis text for a grid mark: the label of the category at an integer
/// position, nothing elsewhere.
fn category_label(labels: &[String], value: f64) -> String {
    let index = value.round();
    if (value - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}
