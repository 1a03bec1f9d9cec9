//! Run command - execute a component on the backend

use clap::Args;
use etude_critique::Linter;
use etude_pupitre::{feedback, ExecuteClient, ExecuteOutcome, ExecuteRequest, HelpLevel};
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
pub struct RunArgs {
    /// Path to the .vue file to run
    pub file: PathBuf,

    /// Help level for failures: 0 raw, 1 filtered, 2 explained, 3 with fix
    #[arg(long, default_value_t = 0)]
    pub level: u8,

    /// Backend base URL (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Write a level-3 suggested fix back to the file
    #[arg(long)]
    pub apply_fix: bool,
}

pub fn run(args: RunArgs) {
    let Some(level) = HelpLevel::from_u8(args.level) else {
        eprintln!("--level must be between 0 and 3");
        std::process::exit(2);
    };

    let code = match fs::read_to_string(&args.file) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Failed to read {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    // Lint is advisory here: warn, but run anyway.
    let markers = Linter::new().validate(&code);
    for marker in &markers {
        let severity = if marker.is_error() { "error" } else { "warning" };
        eprintln!(
            "{}:{}:{}: {} {} [{}]",
            args.file.display(),
            marker.line,
            marker.column,
            severity,
            marker.message,
            marker.rule,
        );
    }

    let config = crate::config::load_config(None);
    let base_url = args.base_url.unwrap_or(config.backend.base_url);
    let client = ExecuteClient::new(base_url);
    let request = ExecuteRequest::for_component(&code, level);

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let outcome = runtime.block_on(client.execute(&request));

    match outcome {
        Ok(outcome) => {
            println!("{}", feedback::render(&outcome));
            if let ExecuteOutcome::Failure(failure) = &outcome {
                if args.apply_fix {
                    if let Some(solution) = &failure.solution {
                        match fs::write(&args.file, solution) {
                            Ok(()) => println!("Applied fix to {}", args.file.display()),
                            Err(e) => {
                                eprintln!("Failed to write {}: {}", args.file.display(), e)
                            }
                        }
                    } else {
                        eprintln!("No fix available (use --level 3)");
                    }
                }
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}", feedback::connection_failure(&e));
            std::process::exit(1);
        }
    }
}
