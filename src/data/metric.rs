use std::num::ParseFloatError;

use thiserror::Error;

use crate::color::SeriesColor;

use super::model::{ChartDataset, ColumnSeries};

pub const PRICE_OFFSET: f64 = 0.72;
pub const PRICE_FACTOR: f64 = 2540.4;

// ---------------------------------------------------------------------------
// One benchmark log line
// ---------------------------------------------------------------------------

/// A parsed `flags,time,improvement` line.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetricRecord {
    pub flags: String,
    pub time: String,
    pub improvement: f64,
}

impl DerivedMetricRecord {
    /// Yearly saving in USD: `(improvement + 0.72) * 2540.4`.
    pub fn price(&self) -> f64 {
        (self.improvement + PRICE_OFFSET) * PRICE_FACTOR
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MetricError {
    #[error("expected 3 comma-separated fields, found {found}")]
    FieldCount { found: usize },
    #[error("improvement '{value}' is not a number")]
    Improvement {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Parse a single log line.
pub fn parse_line(line: &str) -> Result<DerivedMetricRecord, MetricError> {
    let fields: Vec<&str> = line.split(',').collect();
    let [flags, time, improvement] = fields.as_slice() else {
        return Err(MetricError::FieldCount {
            found: fields.len(),
        });
    };

    let value = improvement.trim();
    let improvement = value
        .parse::<f64>()
        .map_err(|source| MetricError::Improvement {
            value: value.to_string(),
            source,
        })?;

    Ok(DerivedMetricRecord {
        flags: flags.trim().to_string(),
        time: time.trim().to_string(),
        improvement,
    })
}

// ---------------------------------------------------------------------------
// Whole log
// ---------------------------------------------------------------------------

/// Outcome of parsing one line.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEntry {
    Parsed(DerivedMetricRecord),
    Malformed {
        /// 1-based line number in the trimmed log.
        line_no: usize,
        raw: String,
        error: String,
    },
}

/// Every line of a log, parsed or marked malformed, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceReport {
    pub entries: Vec<LogEntry>,
}

impl PriceReport {
    pub fn records(&self) -> impl Iterator<Item = &DerivedMetricRecord> {
        self.entries.iter().filter_map(|e| match e {
            LogEntry::Parsed(r) => Some(r),
            LogEntry::Malformed { .. } => None,
        })
    }

    pub fn malformed(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e, LogEntry::Malformed { .. }))
    }

    pub fn malformed_count(&self) -> usize {
        self.malformed().count()
    }

    /// Single-series dataset of prices keyed by flags.  Malformed lines are
    /// left out.
    pub fn to_dataset(&self, label: &str, color: SeriesColor) -> ChartDataset {
        let (labels, values): (Vec<String>, Vec<String>) = self
            .records()
            .map(|r| (r.flags.clone(), r.price().to_string()))
            .unzip();
        if labels.is_empty() {
            return ChartDataset::default();
        }
        ChartDataset {
            labels,
            series: vec![ColumnSeries {
                name: label.to_string(),
                values,
                color,
            }],
        }
    }
}

/// Parse a benchmark log.  Surrounding whitespace is trimmed and blank lines
/// are skipped; every other line becomes a [`LogEntry`].
pub fn parse_log(text: &str) -> PriceReport {
    let entries = text
        .trim()
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| match parse_line(line) {
            Ok(record) => LogEntry::Parsed(record),
            Err(e) => {
                log::warn!("benchmark log line {}: {e}: {line:?}", i + 1);
                LogEntry::Malformed {
                    line_no: i + 1,
                    raw: line.to_string(),
                    error: e.to_string(),
                }
            }
        })
        .collect();
    PriceReport { entries }
}
