use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::color::SeriesColor;

// ---------------------------------------------------------------------------
// Record – one data row of the source table
// ---------------------------------------------------------------------------

/// An ordered mapping from column name to cell text.
/// All records of one [`Table`] carry the same columns in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    cells: Vec<(String, String)>,
}

impl Record {
    /// Pair each header with its cell.  Missing cells become empty strings,
    /// surplus cells are dropped.
    pub fn from_cells<'a, I>(headers: &[String], cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut cells = cells.into_iter();
        let cells = headers
            .iter()
            .map(|h| (h.clone(), cells.next().unwrap_or("").to_string()))
            .collect();
        Record { cells }
    }

    /// Look up the cell of a column by name.
    #[cfg(test)]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Cell at a column position.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(|(_, value)| value.as_str())
    }

    /// Iterate `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    /// Cell of the first column (the category key).
    pub fn key(&self) -> &str {
        self.cells.first().map(|(_, v)| v.as_str()).unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// Table – the complete parsed tabular source
// ---------------------------------------------------------------------------

/// Header list plus records, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    /// The first column, used as the x-axis category.
    pub fn key_column(&self) -> Option<&str> {
        self.headers.first().map(String::as_str)
    }

    /// Every column except the category key.
    pub fn series_columns(&self) -> &[String] {
        self.headers.get(1..).unwrap_or(&[])
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Chart data
// ---------------------------------------------------------------------------

/// A named column of values aligned with [`ChartDataset::labels`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSeries {
    pub name: String,
    /// Raw cell text, one per label.
    pub values: Vec<String>,
    pub color: SeriesColor,
}

impl ColumnSeries {
    /// Values as numbers; cells that do not parse are `None` and are not drawn.
    pub fn numeric(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values.iter().map(|v| v.trim().parse::<f64>().ok())
    }
}

/// Chart-ready, column-oriented view of a source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub series: Vec<ColumnSeries>,
}

impl ChartDataset {
    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.series.is_empty()
    }

    /// Content hash over labels, series names and values.
    ///
    /// Used as the chart's redraw key: two datasets with the same content
    /// share a version, so the plot keeps its view state across frames.
    pub fn version(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.labels.hash(&mut hasher);
        for s in &self.series {
            s.name.hash(&mut hasher);
            s.values.hash(&mut hasher);
        }
        hasher.finish()
    }
}
