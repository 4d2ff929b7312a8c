pub use crate::analysis::frequency_table::FrequencyTable;
pub use crate::analysis::length::word_length;
pub use crate::analysis::summary::{LengthSummary, SummaryError};
pub use crate::api::prompt::{prompt_for_words, PromptError};
pub use crate::api::word_set::{LoadError, WordSet};
pub use crate::common::buckets::{create_length_buckets, format_bucket_table, BucketEntry};
#[cfg(feature = "png")]
pub use crate::common::plots::{create_length_frequency_plot, PlotError};
pub use crate::common::report::{write_summary, JsonReport};
pub use crate::common::text_chart::{render_text_chart, DEFAULT_CHART_WIDTH};
