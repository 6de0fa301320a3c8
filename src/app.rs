use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::{AppState, Screen};
use crate::ui::{panels, screens};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // No-op unless the active screen has not read its source yet.
        self.state.ensure_loaded();

        // ---- Top panel: menu bar + screen links ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: active screen ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.screen {
            Screen::Home => screens::home_screen(ui, &mut self.state),
            Screen::Price => screens::price_screen(ui, &self.state),
        });
    }
}
