use eframe::egui::{self, Ui};

use super::{panels, plot, table};
use crate::data::metric::LogEntry;
use crate::state::AppState;

fn loading(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label("Loading...");
    });
}

/// Home: column links, heading, filtered chart and raw records.
pub fn home_screen(ui: &mut Ui, state: &mut AppState) {
    let Some(home) = &state.home else {
        loading(ui);
        return;
    };

    let entries = home.navigation();
    let active = home.selection.name().to_string();
    if let Some(choice) = panels::column_nav(ui, &entries, &active) {
        state.select_column(&choice);
    }
    ui.separator();

    let Some(home) = &state.home else {
        return;
    };
    if home.dataset.is_none() {
        loading(ui);
        return;
    }

    ui.heading(format!("{} Stats", home.selection));

    egui::TopBottomPanel::bottom("records_panel")
        .resizable(true)
        .show_inside(ui, |ui: &mut Ui| {
            egui::CollapsingHeader::new(format!("Records ({})", home.table.len()))
                .default_open(false)
                .show(ui, |ui: &mut Ui| table::records_table(ui, &home.table));
        });

    plot::bar_chart(ui, "home_chart", &home.view, |v| format!("{v}"));
}

/// Price: single series of derived prices keyed by flags.
pub fn price_screen(ui: &mut Ui, state: &AppState) {
    let Some(price) = &state.price else {
        loading(ui);
        return;
    };
    let Some(dataset) = &price.dataset else {
        loading(ui);
        return;
    };

    ui.heading("Improvement Graph");

    if price.report.malformed_count() > 0 {
        egui::CollapsingHeader::new("Skipped lines")
            .default_open(false)
            .show(ui, |ui: &mut Ui| {
                for entry in price.report.malformed() {
                    if let LogEntry::Malformed { line_no, raw, error } = entry {
                        ui.label(format!("{line_no}: {raw:?} ({error})"));
                    }
                }
            });
    }
    plot::bar_chart(ui, "price_chart", dataset, |v| format!("Savings: ${v:.2}"));
}
