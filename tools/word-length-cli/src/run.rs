use crate::Args;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use word_length_stats::prelude::*;

pub const WELCOME_MESSAGE: &str = "Welcome to Word length frequency counter";

/// Errors that can end a run of the tool
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error("Failed to render chart: {0}")]
    Plot(#[from] PlotError),

    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),

    #[error("Failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

type Result<T> = core::result::Result<T, CliError>;

/// Runs the whole pipeline: acquire words, aggregate, report, chart.
///
/// Prompts are read from `input`; prompts and every report go to `output`.
pub fn run<R: BufRead, W: Write>(args: &Args, input: R, mut output: W) -> Result<()> {
    if args.width == 0 {
        return Err(CliError::InvalidArgument(
            "chart width must be at least 1".to_string(),
        ));
    }

    let words = match &args.input {
        // No operator to retry with; a missing file is fatal here.
        Some(path) => WordSet::load(path)?,
        None => {
            writeln!(output, "{WELCOME_MESSAGE}")?;
            prompt_for_words(input, &mut output)?
        }
    };

    let table = FrequencyTable::from_words(&words);
    let summary = LengthSummary::from_table(&table)?;

    if args.json {
        JsonReport::new(summary, &table).write(&mut output)?;
    } else {
        write_summary(&summary, &mut output)?;

        if args.table {
            let buckets = create_length_buckets(&table);
            writeln!(output)?;
            writeln!(
                output,
                "{}",
                format_bucket_table(&buckets, Some("Word Length Distribution"))
            )?;
        }

        if !args.no_chart {
            writeln!(output)?;
            write!(output, "{}", render_text_chart(&table, args.width))?;
        }
    }

    if let Some(chart_path) = &args.output {
        create_length_frequency_plot(&table, chart_path)?;
        if !args.json {
            writeln!(output, "Saved chart to {}", chart_path.display())?;
        }
    }

    output.flush()?;
    Ok(())
}
