//! Operator-facing reports for a [`LengthSummary`]

use crate::analysis::frequency_table::FrequencyTable;
use crate::analysis::summary::LengthSummary;
use serde::Serialize;
use std::io::{self, Write};

/// Writes the three-line text summary.
pub fn write_summary<W: Write>(summary: &LengthSummary, mut output: W) -> io::Result<()> {
    writeln!(
        output,
        "The maximum length of a word is {} characters",
        summary.max_length
    )?;
    writeln!(
        output,
        "The minimum length of a word is {} characters",
        summary.min_length
    )?;
    writeln!(
        output,
        "Most words are {} characters in length",
        summary.most_common_length
    )
}

/// One row of the JSON frequency listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub length: usize,
    pub count: usize,
}

/// Machine-readable report: the summary plus every length bucket
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub summary: LengthSummary,
    pub frequencies: Vec<FrequencyEntry>,
}

impl JsonReport {
    pub fn new(summary: LengthSummary, table: &FrequencyTable) -> Self {
        Self {
            summary,
            frequencies: table
                .iter()
                .map(|(length, count)| FrequencyEntry { length, count })
                .collect(),
        }
    }

    /// Writes the report as pretty-printed JSON followed by a newline.
    pub fn write<W: Write>(&self, mut output: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(&mut output, self)?;
        writeln!(output).map_err(serde_json::Error::io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::word_set::WordSet;

    fn example() -> (LengthSummary, FrequencyTable) {
        let table = FrequencyTable::from_words(&WordSet::from_text("a bb cc ddd"));
        (LengthSummary::from_table(&table).unwrap(), table)
    }

    #[test]
    fn writes_three_summary_lines() {
        let (summary, _) = example();
        let mut output = Vec::new();
        write_summary(&summary, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "The maximum length of a word is 3 characters\n\
             The minimum length of a word is 1 characters\n\
             Most words are 2 characters in length\n"
        );
    }

    #[test]
    fn json_report_lists_summary_and_frequencies() {
        let (summary, table) = example();
        let mut output = Vec::new();
        JsonReport::new(summary, &table).write(&mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["summary"]["max_length"], 3);
        assert_eq!(value["summary"]["min_length"], 1);
        assert_eq!(value["summary"]["most_common_length"], 2);
        assert_eq!(value["summary"]["total_words"], 4);
        assert_eq!(
            value["frequencies"],
            serde_json::json!([
                { "length": 1, "count": 1 },
                { "length": 2, "count": 2 },
                { "length": 3, "count": 1 },
            ])
        );
    }
}
