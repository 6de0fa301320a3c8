use std::path::PathBuf;

use crate::color::{ColorAssigner, SeriesColor};
use crate::config::DashboardConfig;
use crate::data::chart::build_dataset;
use crate::data::filter::{navigation_entries, select_series, ColumnSelection};
use crate::data::loader;
use crate::data::metric::{parse_log, PriceReport};
use crate::data::model::{ChartDataset, Table};

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Price,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Home, Screen::Price];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Performance Stats",
            Screen::Price => "Price Stats",
        }
    }
}

// ---------------------------------------------------------------------------
// Home screen state
// ---------------------------------------------------------------------------

/// Parsed table plus the selection-filtered view derived from it.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub table: Table,
    /// Full dataset; `None` while there is nothing to show ("Loading…").
    pub dataset: Option<ChartDataset>,
    pub selection: ColumnSelection,
    /// Cached result of applying `selection` to `dataset`.
    pub view: ChartDataset,
}

impl HomeState {
    pub fn new(table: Table, colors: &mut ColorAssigner) -> Self {
        let dataset = (!table.is_empty()).then(|| build_dataset(&table, colors));
        let mut state = HomeState {
            table,
            dataset,
            ..Default::default()
        };
        state.refresh_view();
        state
    }

    /// Switch the visible series.  Works on the cached data only.
    pub fn select(&mut self, name: &str) {
        self.selection = ColumnSelection::from_name(name);
        self.refresh_view();
    }

    /// "All Data" plus every series; empty until data is available.
    pub fn navigation(&self) -> Vec<String> {
        self.dataset
            .as_ref()
            .map(navigation_entries)
            .unwrap_or_default()
    }

    fn refresh_view(&mut self) {
        self.view = match &self.dataset {
            Some(ds) => select_series(ds, &self.selection),
            None => ChartDataset::default(),
        };
    }
}

// ---------------------------------------------------------------------------
// Price screen state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct PriceState {
    pub report: PriceReport,
    /// `None` while no line parsed ("Loading…").
    pub dataset: Option<ChartDataset>,
}

impl PriceState {
    pub fn new(report: PriceReport, label: &str) -> Self {
        let dataset = report.to_dataset(label, price_color());
        PriceState {
            dataset: (!dataset.is_empty()).then_some(dataset),
            report,
        }
    }
}

/// Fill colour of the Price chart.
pub fn price_color() -> SeriesColor {
    SeriesColor::from_rgba(75, 192, 192, 128)
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Only the active screen holds data; the other one is dropped on
/// navigation and loaded afresh when it becomes active again.
pub struct AppState {
    pub config: DashboardConfig,
    pub screen: Screen,
    /// Series colours for the whole session.
    pub colors: ColorAssigner,
    pub home: Option<HomeState>,
    pub price: Option<PriceState>,
    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_colors(config, ColorAssigner::new())
    }

    pub fn with_colors(config: DashboardConfig, colors: ColorAssigner) -> Self {
        Self {
            config,
            screen: Screen::Home,
            colors,
            home: None,
            price: None,
            status_message: None,
        }
    }

    /// Make `screen` active.  Re-selecting the active screen is a no-op.
    pub fn navigate(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        log::debug!("navigating to {}", screen.title());
        self.screen = screen;
        self.home = None;
        self.price = None;
        self.status_message = None;
    }

    /// Load the active screen's source once per entry.
    pub fn ensure_loaded(&mut self) {
        match self.screen {
            Screen::Home if self.home.is_none() => self.load_home(),
            Screen::Price if self.price.is_none() => self.load_price(),
            _ => {}
        }
    }

    /// Drop the active screen's data and read its source again.
    pub fn reload(&mut self) {
        self.home = None;
        self.price = None;
        self.status_message = None;
        self.ensure_loaded();
    }

    /// Forget every series colour and redraw with fresh ones.
    pub fn reset_colors(&mut self) {
        if !self.colors.is_empty() {
            log::info!("Clearing {} series colour(s)", self.colors.len());
            self.colors.clear();
        }
        self.reload();
    }

    pub fn set_table_source(&mut self, path: PathBuf) {
        self.config.table_source = path;
        if self.screen == Screen::Home {
            self.reload();
        }
    }

    pub fn set_log_source(&mut self, path: PathBuf) {
        self.config.log_source = path;
        if self.screen == Screen::Price {
            self.reload();
        }
    }

    /// Change the Home selection; ignored while Home is not loaded.
    pub fn select_column(&mut self, name: &str) {
        if let Some(home) = &mut self.home {
            home.select(name);
        }
    }

    fn load_home(&mut self) {
        let path = &self.config.table_source;
        let home = match loader::load_table(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows from {} (key column {:?}, series {:?})",
                    table.len(),
                    path.display(),
                    table.key_column().unwrap_or_default(),
                    table.series_columns()
                );
                HomeState::new(table, &mut self.colors)
            }
            Err(e) => {
                log::error!("Failed to load table: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                HomeState::default()
            }
        };
        self.home = Some(home);
    }

    fn load_price(&mut self) {
        let path = &self.config.log_source;
        let price = match loader::read_log(path) {
            Ok(text) => {
                let report = parse_log(&text);
                let bad = report.malformed_count();
                log::info!(
                    "Loaded {} benchmark entries ({bad} malformed) from {}",
                    report.entries.len(),
                    path.display()
                );
                if bad > 0 {
                    self.status_message = Some(format!("{bad} malformed log line(s) skipped"));
                }
                PriceState::new(report, &self.config.price_series_label)
            }
            Err(e) => {
                log::error!("Failed to load benchmark log: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                PriceState::default()
            }
        };
        self.price = Some(price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::ALL_DATA;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("haco-state-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn state_with(table: &str, log: &str, tag: &str) -> AppState {
        let config = DashboardConfig {
            table_source: write_temp(&format!("{tag}.csv"), table),
            log_source: write_temp(&format!("{tag}.log"), log),
            ..Default::default()
        };
        AppState::with_colors(config, ColorAssigner::with_seed(1))
    }

    #[test]
    fn home_loads_once_and_filters_in_memory() {
        let mut state = state_with("K,A,B\nr1,1,2\nr2,3,4\n", "", "home");
        state.ensure_loaded();

        // Source disappears; selection must still work from the cache.
        std::fs::remove_file(&state.config.table_source).ok();
        state.ensure_loaded();
        state.select_column("B");

        let home = state.home.as_ref().unwrap();
        assert_eq!(home.navigation(), vec![ALL_DATA, "A", "B"]);
        assert_eq!(home.view.series.len(), 1);
        assert_eq!(home.view.series[0].name, "B");
        assert_eq!(home.view.labels, vec!["r1", "r2"]);

        state.select_column(ALL_DATA);
        assert_eq!(state.home.as_ref().unwrap().view.series.len(), 2);
    }

    #[test]
    fn header_only_table_stays_loading() {
        let mut state = state_with("K,A,B\n", "", "header-only");
        state.ensure_loaded();
        let home = state.home.as_ref().unwrap();
        assert!(home.dataset.is_none());
        assert!(home.view.is_empty());
        assert!(home.navigation().is_empty());
    }

    #[test]
    fn missing_source_degrades_to_loading() {
        let config = DashboardConfig {
            table_source: std::env::temp_dir().join("haco-state-missing.csv"),
            ..Default::default()
        };
        let mut state = AppState::with_colors(config, ColorAssigner::with_seed(0));
        state.ensure_loaded();
        assert!(state.home.as_ref().unwrap().dataset.is_none());
        assert!(state.status_message.is_some());

        state.select_column("A");
        assert!(state.home.as_ref().unwrap().view.is_empty());
    }

    #[test]
    fn navigation_drops_inactive_screen_and_keeps_colours() {
        let mut state = state_with("K,A\nr1,1\n", "O2,1.5s,0.10\nbad\n", "nav");
        state.ensure_loaded();
        let color_a = state.colors.get("A").cloned().unwrap();

        state.navigate(Screen::Price);
        state.ensure_loaded();
        assert!(state.home.is_none());
        let price = state.price.as_ref().unwrap();
        assert_eq!(price.report.malformed_count(), 1);
        assert_eq!(price.dataset.as_ref().unwrap().labels, vec!["O2"]);
        assert!(state.status_message.is_some());

        state.navigate(Screen::Home);
        state.ensure_loaded();
        assert!(state.price.is_none());
        assert_eq!(state.colors.get("A"), Some(&color_a));
        let home = state.home.as_ref().unwrap();
        assert_eq!(home.dataset.as_ref().unwrap().series[0].color, color_a);
    }

    #[test]
    fn reset_colours_reassigns_on_reload() {
        let mut state = state_with("K,A\nr1,1\n", "", "reset");
        state.ensure_loaded();
        assert_eq!(state.colors.len(), 1);
        state.reset_colors();
        assert_eq!(state.colors.len(), 1);
        let home = state.home.as_ref().unwrap();
        assert_eq!(
            Some(&home.dataset.as_ref().unwrap().series[0].color),
            state.colors.get("A")
        );
    }

    #[test]
    fn switching_table_source_reloads_home() {
        let mut state = state_with("K,A\nr1,1\n", "", "switch");
        state.ensure_loaded();
        let other = write_temp("switch-other.csv", "K,X,Y\nq,1,2\n");
        state.set_table_source(other);
        let home = state.home.as_ref().unwrap();
        assert_eq!(home.navigation(), vec![ALL_DATA, "X", "Y"]);
    }

    #[test]
    fn screen_titles() {
        assert_eq!(Screen::Home.title(), "Performance Stats");
        assert_eq!(Screen::Price.title(), "Price Stats");
    }
}
