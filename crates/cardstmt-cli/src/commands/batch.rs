//! Batch processing of a folder of statements.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::{glob, Pattern};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use cardstmt_core::models::config::BatchConfig;
use cardstmt_core::{ResultRecord, StatementConfig, StatementProcessor};

use crate::output;

/// Arguments for batch mode.
#[derive(Args)]
pub struct BatchArgs {
    /// Folder containing statement PDFs
    pub folder: Option<PathBuf>,

    /// JSON output path [default: results.json]
    #[arg(long = "json", value_name = "PATH")]
    json_out: Option<PathBuf>,

    /// CSV output path [default: results.csv]
    #[arg(long = "csv", value_name = "PATH")]
    csv_out: Option<PathBuf>,

    /// Password for encrypted statements
    #[arg(long)]
    password: Option<String>,

    /// Number of statements processed in parallel
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Do not print the JSON results to stdout
    #[arg(long)]
    no_console: bool,
}

impl BatchArgs {
    fn apply(&self, config: &mut StatementConfig) {
        if let Some(path) = &self.json_out {
            config.output.json_path = path.clone();
        }
        if let Some(path) = &self.csv_out {
            config.output.csv_path = path.clone();
        }
        if let Some(password) = &self.password {
            config.pdf.password = password.clone();
        }
        if let Some(jobs) = self.jobs {
            config.batch.jobs = jobs;
        }
        if self.no_console {
            config.output.print_console = false;
        }
    }
}

pub async fn run(args: BatchArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    args.apply(&mut config);
    config.validate()?;

    let folder = args.folder.unwrap_or_else(|| PathBuf::from("."));
    let files = collect_files(&folder, &config.batch)?;

    if files.is_empty() {
        warn!("No statements found in {}", folder.display());
    }
    eprintln!(
        "{} Found {} statements in {}",
        style("ℹ").blue(),
        files.len(),
        folder.display()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} statements")?
            .progress_chars("=>-"),
    );

    let processor = Arc::new(StatementProcessor::from_config(&config));
    let results = process_files(files, processor, &config.pdf.password, config.batch.jobs, &pb).await?;
    pb.finish_and_clear();

    if config.output.print_console {
        println!("{}", output::format_json(&results)?);
    }

    output::write_json(&config.output.json_path, &results)?;
    output::write_csv(&config.output.csv_path, &results)?;

    print_summary(&results, &config, start);

    Ok(())
}

/// Files directly inside `folder` with an accepted extension, sorted by path.
///
/// A missing folder yields no files.
fn collect_files(folder: &Path, batch: &BatchConfig) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = Path::new(&Pattern::escape(&folder.to_string_lossy())).join("*");

    let mut files: Vec<PathBuf> = glob(&pattern.to_string_lossy())?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| batch.accepts_extension(ext))
        })
        .collect();

    files.sort();
    debug!("Collected {} files from {}", files.len(), folder.display());
    Ok(files)
}

/// Process every file, at most `jobs` at a time, keeping input order.
///
/// A file that cannot be processed becomes an error record, including one
/// whose extraction panics; it never stops the batch.
async fn process_files(
    files: Vec<PathBuf>,
    processor: Arc<StatementProcessor>,
    password: &str,
    jobs: usize,
    pb: &ProgressBar,
) -> anyhow::Result<Vec<ResultRecord>> {
    let password: Arc<str> = Arc::from(password);
    let semaphore = Arc::new(Semaphore::new(jobs));
    let sources: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();

    let mut tasks = JoinSet::new();
    for (index, path) in files.into_iter().enumerate() {
        let permit = Arc::clone(&semaphore).acquire_owned().await?;
        let processor = Arc::clone(&processor);
        let password = Arc::clone(&password);
        let pb = pb.clone();

        tasks.spawn_blocking(move || {
            let _permit = permit;
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| processor.process(&path, &password)));
            let record = match outcome {
                Ok(Ok(record)) => record,
                Ok(Err(e)) => {
                    warn!("Failed to process {}: {}", path.display(), e);
                    ResultRecord::failed(path.display().to_string(), e)
                }
                Err(payload) => {
                    let reason = panic_message(payload.as_ref());
                    warn!("Processing {} panicked: {}", path.display(), reason);
                    ResultRecord::failed(path.display().to_string(), format!("processing panicked: {reason}"))
                }
            };
            pb.inc(1);
            (index, record)
        });
    }

    let mut slots: Vec<Option<ResultRecord>> = vec![None; sources.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, record)) => slots[index] = Some(record),
            Err(e) => warn!("Statement task did not complete: {}", e),
        }
    }

    Ok(slots
        .into_iter()
        .zip(sources)
        .map(|(slot, source)| {
            slot.unwrap_or_else(|| ResultRecord::failed(source, "processing did not complete"))
        })
        .collect())
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

fn print_summary(results: &[ResultRecord], config: &StatementConfig, start: Instant) {
    let failed: Vec<_> = results.iter().filter(|r| r.is_error()).collect();
    let unknown = results
        .iter()
        .filter(|r| !r.is_error() && r.bank.is_some_and(|bank| !bank.is_known()))
        .count();

    eprintln!();
    eprintln!(
        "{} Processed {} statements in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} parsed, {} unrecognized, {} failed",
        style(results.len() - failed.len() - unknown).green(),
        style(unknown).yellow(),
        style(failed.len()).red()
    );
    eprintln!(
        "   JSON: {}  CSV: {}",
        config.output.json_path.display(),
        config.output.csv_path.display()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.source_file,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}
