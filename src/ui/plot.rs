use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color;
use crate::data::model::AnalysisResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Signal plots (central panel)
// ---------------------------------------------------------------------------

/// Render the three signal views: original and filtered stacked on the
/// left, the combined overlay on the right.
pub fn analysis_plots(ui: &mut Ui, state: &AppState) {
    let Some(result) = &state.result else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a dataset to view a record  (File → Open…)");
        });
        return;
    };

    let row_height = (ui.available_height() - ui.spacing().item_spacing.y) / 2.0;

    ui.columns(2, |columns: &mut [Ui]| {
        columns[0].vertical(|ui: &mut Ui| {
            signal_plot(ui, "original_plot", row_height, |plot_ui| {
                plot_ui.line(original_line(result));
            });
            signal_plot(ui, "filtered_plot", row_height, |plot_ui| {
                plot_ui.line(filtered_line(result));
            });
        });

        columns[1].vertical(|ui: &mut Ui| {
            let full_height = ui.available_height();
            signal_plot(ui, "combined_plot", full_height, |plot_ui| {
                plot_ui.line(original_line(result));
                plot_ui.line(filtered_line(result));
            });
        });
    });
}

/// Shared plot frame: time on x, amplitude on y, legend on.
fn signal_plot(
    ui: &mut Ui,
    id: &str,
    height: f32,
    add_contents: impl FnOnce(&mut egui_plot::PlotUi),
) {
    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label("Time (s)")
        .y_axis_label("Amplitude")
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| add_contents(plot_ui));
}

fn original_line(result: &AnalysisResult) -> Line<'static> {
    signal_line(&result.time, &result.original)
        .name("Original")
        .color(color::original_trace())
}

fn filtered_line(result: &AnalysisResult) -> Line<'static> {
    signal_line(&result.time, &result.filtered)
        .name("Filtered")
        .color(color::filtered_trace())
}

fn signal_line(time: &[f64], values: &[f64]) -> Line<'static> {
    let points: PlotPoints = time
        .iter()
        .zip(values.iter())
        .map(|(&t, &v)| [t, v])
        .collect();
    Line::new(points).width(1.5)
}
