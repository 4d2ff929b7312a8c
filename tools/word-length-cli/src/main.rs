mod run;

use argh::FromArgs;
use std::io;
use std::path::PathBuf;
use word_length_stats::prelude::DEFAULT_CHART_WIDTH;

/// Word length frequency counter
#[derive(FromArgs, Debug)]
pub struct Args {
    /// word list to analyze; prompts for a path when omitted
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// also save the bar chart as a PNG image at this path
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// width of the terminal bar chart in characters (default: 60)
    #[argh(option, short = 'w', default = "DEFAULT_CHART_WIDTH")]
    width: usize,

    /// print a table of word counts per length
    #[argh(switch)]
    table: bool,

    /// print a JSON report instead of the text summary and chart
    #[argh(switch)]
    json: bool,

    /// skip the terminal bar chart
    #[argh(switch)]
    no_chart: bool,
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();
    log::debug!("Parsed arguments: {args:?}");

    let stdin = io::stdin();
    if let Err(e) = run::run(&args, stdin.lock(), io::stdout().lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
