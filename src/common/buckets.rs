//! Length bucket rows and ASCII table formatting
//!
//! This module provides:
//! - [`BucketEntry`] type describing one length bucket with count and percentage
//! - ASCII table formatting using the [`tabled`] crate

use crate::analysis::frequency_table::FrequencyTable;
use tabled::{Table, Tabled};

/// A single length bucket with its count and share of all words
#[derive(Debug, Clone, Tabled)]
pub struct BucketEntry {
    /// Word length in characters
    #[tabled(rename = "Length")]
    pub length: usize,
    /// Number of unique words with this length
    #[tabled(rename = "Count")]
    pub count: usize,
    /// Percentage of all unique words in this bucket
    #[tabled(rename = "Percentage")]
    pub percentage: String,
}

impl BucketEntry {
    /// Creates a new bucket entry with formatted percentage
    pub fn new(length: usize, count: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            "0.00%".to_string()
        } else {
            format!("{:.2}%", (count as f64 / total as f64) * 100.0)
        };

        Self {
            length,
            count,
            percentage,
        }
    }
}

/// Creates one [`BucketEntry`] per length present in the table, in ascending order.
pub fn create_length_buckets(table: &FrequencyTable) -> Vec<BucketEntry> {
    let total = table.total();
    table
        .iter()
        .map(|(length, count)| BucketEntry::new(length, count, total))
        .collect()
}

/// Formats bucket entries as an ASCII table using the [`tabled`] crate
///
/// # Arguments
/// * `buckets` - A slice of [`BucketEntry`] to format
/// * `title` - Optional title for the table
pub fn format_bucket_table(buckets: &[BucketEntry], title: Option<&str>) -> String {
    if buckets.is_empty() {
        return "No data available for bucketing".to_string();
    }

    let table = Table::new(buckets).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}
