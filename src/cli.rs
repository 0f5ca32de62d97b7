use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::debug;

use crate::pipeline::{Pipeline, PipelineConfig};
use crate::report::RunReport;
use crate::sink::{ConsoleSink, FileSink, Sink};
use crate::tokenize::AlphanumericTokenizer;

#[derive(Parser, Debug)]
#[command(name = "wordcount")]
#[command(about = "Count word occurrences in a text file", long_about = None)]
pub struct Cli {
    /// UTF-8 text file to count.
    pub input: PathBuf,
    /// Output file, replaced on success. Prints to stdout when omitted.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Also print the result to stdout when writing an output file.
    #[arg(long)]
    pub print: bool,
    /// Line partitions counted in parallel (0 = one per CPU).
    #[arg(long, short = 'j', default_value_t = 1)]
    pub partitions: usize,
    /// Write a JSON run report to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
    /// Increase log verbosity (-v, -vv, -vvv). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::with_partitions(self.partitions)
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    let pipeline = Pipeline::new(AlphanumericTokenizer, cli.pipeline_config());
    debug!(config = ?pipeline.config(), "pipeline configured");

    let print_to_console = cli.output.is_none() || cli.print;
    let mut file_sink = cli.output.as_ref().map(FileSink::new);
    let mut console_sink = ConsoleSink::stdout();

    let mut sinks: Vec<&mut dyn Sink> = Vec::with_capacity(2);
    if let Some(sink) = file_sink.as_mut() {
        sinks.push(sink);
    }
    if print_to_console {
        sinks.push(&mut console_sink);
    }

    let summary = pipeline
        .run(&cli.input, &mut sinks)
        .with_context(|| format!("word count failed for {}", cli.input.display()))?;

    if let Some(report_path) = cli.report.as_deref() {
        RunReport::from_summary(&summary, cli.output.as_deref())
            .write(report_path)
            .context("report stage")?;
    }

    Ok(())
}
