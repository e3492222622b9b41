use anyhow::Context;
use clap::Parser;
use log::error;
use std::process::ExitCode;
use word_aligner::{
    cli::Cli,
    report::{PairResult, Report},
    SummaryStatistics,
};

fn run(args: &Cli) -> anyhow::Result<()> {
    let mut summary = SummaryStatistics::default();
    let mut pairs = vec![];

    // Process the input.
    args.input
        .process_input_pairs(&args.normalize, |reference, hypothesis| {
            let pair = PairResult::from_words(reference, hypothesis);

            if args.silent == 0 {
                pair.print(args.show_alignment);
            }
            summary += pair.alignment;
            if args.output.is_some() {
                pairs.push(pair);
            }
        })
        .context("Failed to read input pairs")?;

    if args.silent <= 1 {
        summary.print();
    }

    if let Some(output) = &args.output {
        Report::new(args, &pairs, summary)
            .write(output)
            .with_context(|| format!("Failed to write results to {}", output.display()))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
