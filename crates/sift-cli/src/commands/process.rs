//! Process command implementation.

use crate::cli::ProcessArgs;
use crate::commands::resolve_config;
use crate::error::Result;
use crate::output::{Formatter, RunSummary};
use sift_llm::OllamaProvider;
use sift_processor::{load_records, persist, BatchOptions, ReviewProcessor};
use tracing::info;

/// Execute the process command.
///
/// Per-record failures are recorded in the output document; only loading,
/// configuration and persistence failures are returned.
pub fn execute_process(args: ProcessArgs, formatter: &Formatter) -> Result<RunSummary> {
    let config = resolve_config(&args.endpoint)?;

    let records = load_records(&args.input)?;
    info!("Loaded {} raw record(s) from {}", records.len(), args.input.display());

    let provider = OllamaProvider::new(&config.endpoint, &config.model)?;
    let processor = ReviewProcessor::from_config(&config, provider.clone(), provider);

    let options = BatchOptions {
        summarize: !args.no_summarize,
        extract: args.extract,
    };
    let entries = processor.process_batch_with(&records, options);

    persist(&entries, &args.output, processor.model_name())?;

    let summary = RunSummary::from_entries(&entries);
    println!("{}", formatter.run_summary(&summary, &args.output));
    Ok(summary)
}
