use clap::Parser;
use sheetsum::cli;

#[derive(Parser)]
#[command(name = "sheetsum")]
#[command(about = "Summarize a spreadsheet workbook into JSON, CSV, and Markdown reports")]
#[command(long_about = "Sheetsum - Workbook summarizer

Reads je_samples.xlsx from the directory above the executable and writes:
  outputs/summary.json                   - full summary, all sheets
  outputs/summary.md                     - human-readable report
  outputs/{sheet}_numeric_describe.csv   - per-sheet numeric statistics
  outputs/{sheet}_missing_values.csv     - per-sheet missing-value counts

The input path is fixed; no flags or environment variables change it.
Set RUST_LOG to tune diagnostic logging (stderr only).")]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetsum=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = cli::summarize() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
