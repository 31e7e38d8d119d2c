use eframe::egui::{self, Color32, DragValue, RichText, Slider, Ui};

use crate::color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – analysis controls
// ---------------------------------------------------------------------------

/// Render the left control panel. Any change reruns the whole pipeline.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Analysis");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };
    let record_count = dataset.len();

    let mut changed = false;

    // ---- Record selection ----
    ui.strong("Patient record");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Index:");
        changed |= ui
            .add(
                DragValue::new(&mut state.request.patient_index)
                    .speed(1)
                    .range(0..=record_count.saturating_sub(1)),
            )
            .changed();
        ui.label(format!("of {record_count}"));
    });

    if let Some(result) = &state.result {
        ui.horizontal(|ui: &mut Ui| {
            ui.label("Label:");
            ui.colored_label(
                color::label_color(result.label),
                RichText::new(result.label.to_string()).strong(),
            );
        });
    }
    ui.separator();

    // ---- Passband ----
    ui.strong("Passband");
    changed |= ui
        .add(
            Slider::new(&mut state.request.low_cutoff, 0.0..=100.0)
                .text("Low-pass cutoff (Hz)"),
        )
        .changed();
    changed |= ui
        .add(
            Slider::new(&mut state.request.high_cutoff, 0.0..=5.0)
                .step_by(0.1)
                .text("High-pass cutoff (Hz)"),
        )
        .changed();
    ui.separator();

    // ---- Sampling ----
    ui.strong("Sampling");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Rate (Hz):");
        changed |= ui
            .add(
                DragValue::new(&mut state.request.sampling_rate)
                    .speed(1.0)
                    .range(1.0..=10_000.0),
            )
            .changed();
    });

    if changed {
        state.reanalyze();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records × {} samples",
                ds.len(),
                ds.samples_per_record
            ));
            if let Some(path) = &state.source_path {
                ui.label(RichText::new(path.display().to_string()).weak());
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open ECG dataset")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records with {} samples each",
                    dataset.len(),
                    dataset.samples_per_record
                );
                state.set_dataset(dataset, path);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
