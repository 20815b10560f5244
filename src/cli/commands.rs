use crate::error::{SummaryError, SummaryResult};
use crate::pipeline;
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};

/// Fixed input/output locations for one run
pub struct RunPaths {
    pub source: PathBuf,
    pub output_dir: PathBuf,
}

/// Resolve the fixed workbook and outputs locations.
///
/// The workbook is `je_samples.xlsx` in the parent of the executable's own
/// directory; outputs go into an `outputs/` directory beside it. No flag or
/// environment variable overrides these paths.
pub fn resolve_paths() -> SummaryResult<RunPaths> {
    let exe = env::current_exe()?;
    let root = exe
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| {
            SummaryError::Location("executable has no parent directory".to_string())
        })?
        .to_path_buf();

    Ok(RunPaths {
        source: root.join("je_samples.xlsx"),
        output_dir: root.join("outputs"),
    })
}

/// Execute the summarize run against the fixed paths
pub fn summarize() -> SummaryResult<()> {
    let paths = resolve_paths()?;
    summarize_at(&paths.source, &paths.output_dir)
}

/// Execute the summarize run against explicit paths
pub fn summarize_at(source: &Path, output_dir: &Path) -> SummaryResult<()> {
    println!("{}", "📊 Sheetsum - Summarizing workbook".bold().green());
    println!("   File: {}", source.display());
    println!();

    let summary = pipeline::run_summary(source, output_dir)?;

    println!("{}", "✅ Summary written:".bold().green());
    println!("   Sheets: {}", summary.sheet_count);
    for (sheet_name, sheet) in &summary.sheets {
        println!(
            "   📄 {}: {} rows, {} columns",
            sheet_name.bright_blue().bold(),
            sheet.rows,
            sheet.columns
        );
    }
    println!("   Output: {}", output_dir.display());

    Ok(())
}
