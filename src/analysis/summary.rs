//! Summary statistics over a [`FrequencyTable`]

use crate::analysis::frequency_table::FrequencyTable;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while summarising a frequency table
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SummaryError {
    #[error("no words found in input")]
    NoWords,
}

type Result<T> = core::result::Result<T, SummaryError>;

/// Headline statistics for a non-empty word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthSummary {
    /// Length of the longest word
    pub max_length: usize,
    /// Length of the shortest word
    pub min_length: usize,
    /// Length shared by the most words (smallest length on ties)
    pub most_common_length: usize,
    /// Number of words having [`LengthSummary::most_common_length`]
    pub most_common_count: usize,
    /// Number of unique words analysed
    pub total_words: usize,
    /// Number of distinct lengths observed
    pub distinct_lengths: usize,
}

impl LengthSummary {
    /// Computes the summary for a table.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::NoWords`] if the table is empty.
    pub fn from_table(table: &FrequencyTable) -> Result<Self> {
        let (
            Some(min_length),
            Some(max_length),
            Some((most_common_length, most_common_count)),
        ) = (table.min_length(), table.max_length(), table.most_common())
        else {
            return Err(SummaryError::NoWords);
        };

        Ok(Self {
            max_length,
            min_length,
            most_common_length,
            most_common_count,
            total_words: table.total(),
            distinct_lengths: table.len(),
        })
    }
}
