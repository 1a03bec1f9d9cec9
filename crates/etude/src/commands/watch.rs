//! Watch command - re-validate a component after each pause in editing

use clap::Args;
use etude_critique::Marker;
use etude_pupitre::{BufferSurface, Debouncer, Session};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Args)]
pub struct WatchArgs {
    /// Path to the .vue file to watch
    pub file: PathBuf,

    /// Quiet period in milliseconds before re-validating (overrides config)
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// File polling interval in milliseconds
    #[arg(long, default_value_t = 100)]
    pub interval_ms: u64,
}

pub fn run(args: WatchArgs) {
    let config = crate::config::load_config(None);
    let window = Duration::from_millis(args.debounce_ms.unwrap_or(config.lint.debounce_ms));
    let interval = Duration::from_millis(args.interval_ms);

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    runtime.block_on(async move {
        if let Err(e) = watch_loop(&args.file, window, interval).await {
            eprintln!("Watch error: {}", e);
            std::process::exit(1);
        }
    });
}

async fn watch_loop(path: &Path, window: Duration, interval: Duration) -> std::io::Result<()> {
    let filename = path.to_string_lossy().to_string();
    let mut session =
        Session::new(BufferSurface::default()).with_debouncer(Debouncer::new(window));

    let initial = tokio::fs::read_to_string(path).await?;
    session.update_content(&initial, Instant::now());
    print_markers(&filename, &session.validate_now());
    println!("Watching {} (Ctrl-C to stop)", filename);

    let mut last_modified = tokio::fs::metadata(path).await?.modified().ok();

    loop {
        tokio::time::sleep(interval).await;
        let now = Instant::now();

        if let Ok(metadata) = tokio::fs::metadata(path).await {
            if let Ok(modified) = metadata.modified() {
                if last_modified != Some(modified) {
                    last_modified = Some(modified);
                    tracing::debug!("change detected in {}", filename);
                    match tokio::fs::read_to_string(path).await {
                        Ok(content) => session.update_content(&content, now),
                        Err(e) => eprintln!("Failed to read {}: {}", filename, e),
                    }
                }
            }
        }

        if let Some(markers) = session.poll(now) {
            print_markers(&filename, &markers);
        }
    }
}

fn print_markers(filename: &str, markers: &[Marker]) {
    if markers.is_empty() {
        println!("{}: no problems found", filename);
        return;
    }

    for marker in markers {
        let severity = if marker.is_error() { "error" } else { "warning" };
        println!(
            "{}:{}:{}: {} {} [{}]",
            filename, marker.line, marker.column, severity, marker.message, marker.rule,
        );
    }

    let errors = markers.iter().filter(|m| m.is_error()).count();
    println!(
        "{} problem{} ({} error{})",
        markers.len(),
        if markers.len() == 1 { "" } else { "s" },
        errors,
        if errors == 1 { "" } else { "s" },
    );
}
