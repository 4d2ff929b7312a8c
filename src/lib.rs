//! # Word Length Stats
//! Computes the distribution of word lengths within a plain text word list.
//!
//! The pipeline is linear: a [`WordSet`] is loaded from a file, folded into a
//! [`FrequencyTable`], summarised into a [`LengthSummary`] and finally charted.
//!
//! [`WordSet`]: api::word_set::WordSet
//! [`FrequencyTable`]: analysis::frequency_table::FrequencyTable
//! [`LengthSummary`]: analysis::summary::LengthSummary

/// Public High Level API
pub mod api {
    /// Interactive acquisition of the input file from the operator.
    pub mod prompt;

    /// The set of unique words loaded from an input file.
    pub mod word_set;
}

/// Length computation and aggregation over a [`api::word_set::WordSet`].
pub mod analysis {
    pub mod frequency_table;
    pub mod length;
    pub mod summary;
}

/// Output formatting shared by the reporting front-ends.
pub mod common {
    pub mod buckets;
    #[cfg(feature = "png")]
    pub mod plots;
    pub mod report;
    pub mod text_chart;
}

pub mod prelude;
