//! Horizontal bar chart rendered as plain text for the terminal

use crate::analysis::frequency_table::FrequencyTable;
use core::fmt::Write;

/// Default number of cells used by the longest bar.
pub const DEFAULT_CHART_WIDTH: usize = 60;

const BAR_CELL: &str = "#";

/// Number of bar cells used to draw `count` when `max_count` fills `width` cells.
///
/// Any non-zero count gets at least one cell so that rare lengths stay visible.
pub fn bar_cells(count: usize, max_count: usize, width: usize) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }

    let scaled = (count as f64 / max_count as f64 * width as f64).round() as usize;
    scaled.clamp(1, width)
}

/// Renders the table as one row per length, e.g. `  3 | ######### 12`.
///
/// Rows are ordered by ascending length and the bar for the largest count spans
/// exactly `width` cells. An empty table renders as an empty string.
pub fn render_text_chart(table: &FrequencyTable, width: usize) -> String {
    let width = width.max(1);
    let Some(max_count) = table.max_count() else {
        return String::new();
    };

    let label_width = table
        .max_length()
        .map(|length| length.to_string().len())
        .unwrap_or(1)
        .max("Length".len());

    let mut chart = String::new();
    // Infallible: writing to a String.
    let _ = writeln!(chart, "{:>label_width$} | Count", "Length");
    let _ = writeln!(chart, "{}-+-{}", "-".repeat(label_width), "-".repeat(width));
    for (length, count) in table {
        let bar = BAR_CELL.repeat(bar_cells(count, max_count, width));
        let _ = writeln!(chart, "{length:>label_width$} | {bar} {count}");
    }
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, 10, 60, 0)]
    #[case::max(10, 10, 60, 60)]
    #[case::half(5, 10, 60, 30)]
    #[case::tiny_is_visible(1, 10_000, 60, 1)]
    #[case::rounds(2, 3, 10, 7)]
    #[case::narrow(3, 3, 1, 1)]
    fn scales_bars(
        #[case] count: usize,
        #[case] max_count: usize,
        #[case] width: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(bar_cells(count, max_count, width), expected);
    }

    #[test]
    fn renders_rows_in_length_order() {
        let table: FrequencyTable = [1, 2, 2, 3].into_iter().collect();
        let chart = render_text_chart(&table, 4);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Length | Count");
        assert_eq!(lines[1], "-------+-----");
        assert_eq!(lines[2], "     1 | ## 1");
        assert_eq!(lines[3], "     2 | #### 2");
        assert_eq!(lines[4], "     3 | ## 1");
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert!(render_text_chart(&FrequencyTable::default(), 10).is_empty());
    }

    #[test]
    fn zero_width_is_clamped() {
        let table: FrequencyTable = [4].into_iter().collect();
        let chart = render_text_chart(&table, 0);
        assert!(chart.lines().any(|line| line.ends_with("| # 1")));
    }
}
