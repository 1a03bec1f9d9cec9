//! Lint command - Lint Vue SFC files

use clap::Args;
use etude_critique::{format_results, format_summary, Linter, OutputFormat};
use glob::glob;
use ignore::Walk;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Args)]
pub struct LintArgs {
    /// Glob pattern(s) to match .vue files
    #[arg(default_value = "./**/*.vue")]
    pub patterns: Vec<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Maximum number of warnings before failing
    #[arg(long)]
    pub max_warnings: Option<usize>,

    /// Quiet mode - only show summary
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: LintArgs) {
    let start = Instant::now();

    // Collect .vue files using glob patterns or directory walking
    let files: Vec<PathBuf> = args
        .patterns
        .iter()
        .flat_map(|pattern| {
            if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
                glob(pattern)
                    .ok()
                    .into_iter()
                    .flatten()
                    .filter_map(|r| r.ok())
                    .filter(|p| {
                        p.extension().is_some_and(|ext| ext == "vue")
                            && !p.components().any(|c| c.as_os_str() == "node_modules")
                    })
                    .collect::<Vec<_>>()
            } else {
                // Directory walking respects .gitignore
                Walk::new(pattern)
                    .filter_map(|e| e.ok())
                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "vue"))
                    .map(|e| e.path().to_path_buf())
                    .collect::<Vec<_>>()
            }
        })
        .collect();

    if files.is_empty() {
        eprintln!("No .vue files found matching patterns: {:?}", args.patterns);
        return;
    }

    let linter = Linter::new();

    // Read and lint in parallel, skipping unreadable files
    let sources: Vec<(String, String)> = files
        .par_iter()
        .filter_map(|path| match fs::read_to_string(path) {
            Ok(source) => Some((path.to_string_lossy().to_string(), source)),
            Err(e) => {
                eprintln!("Failed to read {}: {}", path.display(), e);
                None
            }
        })
        .collect();

    let (results, summary) = linter.lint_files(&sources);

    let format = match args.format.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    };

    if !args.quiet || summary.error_count > 0 || summary.warning_count > 0 {
        let output = format_results(&results, format);
        if !output.trim().is_empty() {
            print!("{}", output);
        }
    }

    let elapsed = start.elapsed();
    if format == OutputFormat::Text {
        println!(
            "\n{}",
            format_summary(summary.error_count, summary.warning_count, sources.len())
        );
        println!("Linted {} files in {:.4?}", sources.len(), elapsed);
    }

    if summary.error_count > 0 {
        std::process::exit(1);
    }

    if let Some(max) = args.max_warnings {
        if summary.warning_count > max {
            eprintln!("\nToo many warnings ({} > max {})", summary.warning_count, max);
            std::process::exit(1);
        }
    }
}
