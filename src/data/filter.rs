use std::fmt;

use super::model::ChartDataset;

/// Selector name that stands for every series.
pub const ALL_DATA: &str = "All Data";

// ---------------------------------------------------------------------------
// Column selection
// ---------------------------------------------------------------------------

/// Which series of the Home chart are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColumnSelection {
    #[default]
    All,
    Column(String),
}

impl ColumnSelection {
    /// Interpret a navigation entry; [`ALL_DATA`] maps to [`ColumnSelection::All`].
    pub fn from_name(name: &str) -> Self {
        if name == ALL_DATA {
            ColumnSelection::All
        } else {
            ColumnSelection::Column(name.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ColumnSelection::All => ALL_DATA,
            ColumnSelection::Column(name) => name,
        }
    }
}

impl fmt::Display for ColumnSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Navigation entries: [`ALL_DATA`] followed by every series name.
pub fn navigation_entries(dataset: &ChartDataset) -> Vec<String> {
    std::iter::once(ALL_DATA.to_string())
        .chain(dataset.series.iter().map(|s| s.name.clone()))
        .collect()
}

/// Restrict a dataset to the selected series.  Labels are kept as they are;
/// an unknown column name leaves no series at all.
pub fn select_series(dataset: &ChartDataset, selection: &ColumnSelection) -> ChartDataset {
    let series = match selection {
        ColumnSelection::All => dataset.series.clone(),
        ColumnSelection::Column(name) => dataset
            .series
            .iter()
            .filter(|s| &s.name == name)
            .cloned()
            .collect(),
    };
    ChartDataset {
        labels: dataset.labels.clone(),
        series,
    }
}
