use crate::color::ColorAssigner;

use super::model::{ChartDataset, ColumnSeries, Table};

/// Axis labels longer than this many characters are shortened.
pub const LABEL_MAX_CHARS: usize = 10;

/// Build the column-oriented chart dataset for a table.
///
/// `labels` are the category-key cells in record order; every other column
/// becomes a [`ColumnSeries`] whose colour comes from `colors`.  A table
/// without records yields an empty dataset.
pub fn build_dataset(table: &Table, colors: &mut ColorAssigner) -> ChartDataset {
    if table.is_empty() {
        return ChartDataset::default();
    }

    let labels: Vec<String> = table.records.iter().map(|r| r.key().to_string()).collect();

    // Cells are taken by position; the key column is index 0.
    let series = table
        .series_columns()
        .iter()
        .enumerate()
        .map(|(i, column)| ColumnSeries {
            name: column.clone(),
            values: table
                .records
                .iter()
                .map(|r| r.cell(i + 1).unwrap_or("").to_string())
                .collect(),
            color: colors.color_for(column).clone(),
        })
        .collect();

    ChartDataset { labels, series }
}

/// Shorten a label for axis display: more than [`LABEL_MAX_CHARS`]
/// characters become the first ten followed by `...`.
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() > LABEL_MAX_CHARS {
        let head: String = label.chars().take(LABEL_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_table;

    #[test]
    fn shapes_follow_the_table() {
        let table = parse_table("K,A,B\nr1,1,2\nr2,3,4\nr3,5,6\n").unwrap();
        let mut colors = ColorAssigner::with_seed(0);
        let ds = build_dataset(&table, &mut colors);

        assert_eq!(ds.labels, vec!["r1", "r2", "r3"]);
        assert_eq!(ds.series.len(), 2);
        for s in &ds.series {
            assert_eq!(s.values.len(), ds.labels.len());
        }
        assert_eq!(ds.series[1].name, "B");
        assert_eq!(ds.series[1].values, vec!["2", "4", "6"]);
    }

    #[test]
    fn series_colours_come_from_the_assigner() {
        let table = parse_table("K,A\nr1,1\n").unwrap();
        let mut colors = ColorAssigner::with_seed(5);
        let first = build_dataset(&table, &mut colors);
        let again = build_dataset(&table, &mut colors);

        assert_eq!(colors.len(), 1);
        assert_eq!(first.series[0].color, again.series[0].color);
        assert_eq!(Some(&first.series[0].color), colors.get("A"));
    }

    #[test]
    fn repeated_headers_keep_their_own_cells() {
        let table = parse_table("K,A,A\nx,1,2\ny,3,4\n").unwrap();
        let ds = build_dataset(&table, &mut ColorAssigner::with_seed(0));

        assert_eq!(ds.series.len(), 2);
        assert_eq!(ds.series[0].name, "A");
        assert_eq!(ds.series[0].values, vec!["1", "3"]);
        assert_eq!(ds.series[1].name, "A_1");
        assert_eq!(ds.series[1].values, vec!["2", "4"]);
    }

    #[test]
    fn header_only_table_is_empty() {
        let table = parse_table("K,A,B\n").unwrap();
        let mut colors = ColorAssigner::with_seed(0);
        let ds = build_dataset(&table, &mut colors);
        assert!(ds.labels.is_empty());
        assert!(ds.series.is_empty());
        assert!(ds.is_empty());
        assert!(colors.is_empty());
    }

    #[test]
    fn key_only_table_has_labels_but_no_series() {
        let table = parse_table("K\na\nb\n").unwrap();
        let ds = build_dataset(&table, &mut ColorAssigner::with_seed(0));
        assert_eq!(ds.labels.len(), 2);
        assert!(ds.series.is_empty());
    }

    #[test]
    fn long_labels_are_truncated() {
        assert_eq!(truncate_label("abcdefghijklm"), "abcdefghij...");
        assert_eq!(truncate_label("abcdefghij"), "abcdefghij");
        assert_eq!(truncate_label("short"), "short");
        assert_eq!(truncate_label(""), "");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_label("ééééééééééé"), "éééééééééé...");
        assert_eq!(truncate_label("éééééééééé"), "éééééééééé");
    }
}
