use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use wavegoldcore::RefError;
use workflow::config::GeneratorConfig;
use workflow::runner::{RunSummary, Runner};

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Golden reference data generator for wavelet tests")]
struct Args {
    /// Load generator settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory to write reference files into (overrides the config file)
    #[arg(long)]
    output_dir: Option<PathBuf>,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Clone, Copy)]
enum Mode {
    /// Hand-computable fixtures, no numeric backend needed
    Basic,
    /// Every transform through the numeric backend
    Full,
}

fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Output directory: {}", summary.output_dir.display()),
        format!("Files written this run: {}", summary.files_written),
        format!("Total files created: {}", summary.total_in_dir),
    ];
    if summary.files_skipped > 0 {
        lines.push(format!("Skipped outputs: {}", summary.files_skipped));
    }
    lines
}

fn print_summary(summary: &RunSummary) {
    println!("\n=== Summary ===");
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match args.config {
        Some(path) => GeneratorConfig::load(path)?.with_output_override(args.output_dir),
        None => GeneratorConfig::from_args(args.output_dir),
    };
    let runner = Runner::new(config);

    match args.mode {
        Mode::Basic => {
            println!("Generating basic reference test data...");
            println!("Output directory: {}", runner.config().output_dir.display());
            let summary = runner.run_basic()?;
            print_summary(&summary);
            println!(
                "\nNote: run `refgen full` for comprehensive coverage \
                 (DWT, MODWT, CWT and all filter families)."
            );
        }
        Mode::Full => {
            println!("Generating reference test data...");
            println!("Output directory: {}", runner.config().output_dir.display());
            let summary = runner.run_full()?;
            print_summary(&summary);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        match err.downcast_ref::<RefError>() {
            Some(RefError::MissingBackend(reason)) => {
                eprintln!("Error: {}", reason);
                eprintln!("Rebuild with the numeric backend enabled:");
                eprintln!("  cargo build -p refgen --features numeric");
            }
            _ => eprintln!("Error generating reference data: {:#}", err),
        }
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_written_and_directory_counts() {
        let summary = RunSummary {
            output_dir: PathBuf::from("testdata"),
            files_written: 20,
            files_skipped: 0,
            total_in_dir: 26,
        };
        assert_eq!(
            summary_lines(&summary),
            vec![
                "Output directory: testdata",
                "Files written this run: 20",
                "Total files created: 26"
            ]
        );
    }

    #[test]
    fn summary_mentions_skipped_outputs_only_when_present() {
        let summary = RunSummary {
            output_dir: PathBuf::from("out"),
            files_written: 3,
            files_skipped: 2,
            total_in_dir: 3,
        };
        assert_eq!(summary_lines(&summary).last().unwrap(), "Skipped outputs: 2");
    }
}
