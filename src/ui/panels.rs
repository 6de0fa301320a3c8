use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Screen};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu: brand, File menu, screen links and status.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("HACO");
        ui.separator();

        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open table…").clicked() {
                open_table_dialog(state);
                ui.close_menu();
            }
            if ui.button("Open log…").clicked() {
                open_log_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
            if ui.button("Reset colours").clicked() {
                state.reset_colors();
                ui.close_menu();
            }
        });

        ui.separator();

        for screen in Screen::ALL {
            if ui
                .selectable_label(state.screen == screen, screen.title())
                .clicked()
            {
                state.navigate(screen);
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Column navigation (Home screen)
// ---------------------------------------------------------------------------

/// Row of column links.  Returns the entry clicked this frame.
pub fn column_nav(ui: &mut Ui, entries: &[String], active: &str) -> Option<String> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.strong("Stats");
        ui.separator();
        for entry in entries {
            if ui.selectable_label(entry == active, entry).clicked() {
                clicked = Some(entry.clone());
            }
        }
    });
    clicked
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_table_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open statistics table")
        .add_filter("Supported files", &["csv", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Table source set to {}", path.display());
        state.set_table_source(path);
    }
}

pub fn open_log_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open benchmark log")
        .add_filter("Log files", &["log", "txt"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Log source set to {}", path.display());
        state.set_log_source(path);
    }
}
