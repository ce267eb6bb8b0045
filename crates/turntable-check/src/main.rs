//! turntable-check: stage local photo sets and generate embed snippets.
//!
//! Runs the same staging store, validation and mock backend the web app
//! uses, so a photo set can be checked from the command line before it
//! is uploaded.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin turntable-check -- stage front.jpg side.png back.jpg --submit
//! cargo run --bin turntable-check -- embed --model mock-id --app-url https://shop.example
//! ```
//!
//! Set `RUST_LOG=debug` for backend logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use futures::executor::block_on;
use tracing_subscriber::EnvFilter;
use turntable_core::embed::{embed_url, iframe_snippet};
use turntable_core::{
    AppConfig, ImageFile, Job, JobBackend, JobId, MockBackend, NoPreviews, StagedFile, StagingSet,
};

type CliStaging = StagingSet<ImageFile, NoPreviews>;

/// Photo set checks and embed snippets for turntable.
#[derive(Parser)]
#[command(name = "turntable-check", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Stage local images and report the order and validation result.
    Stage {
        /// Image files, in submission order.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Submit a valid set to the mock backend and print the job.
        #[arg(long)]
        submit: bool,
    },

    /// Print the iframe embed snippet for a job.
    Embed {
        /// Job id; the mock job when omitted.
        #[arg(long)]
        model: Option<String>,

        /// Public app URL (overrides `TURNTABLE_APP_URL`).
        #[arg(long)]
        app_url: Option<String>,
    },
}

/// Build-time config overridden by `TURNTABLE_*` variables at run time.
fn runtime_config() -> AppConfig {
    let var = |name: &str| std::env::var(name).ok();
    AppConfig::from_build_env().with_overrides(
        var("TURNTABLE_APP_URL").as_deref(),
        var("TURNTABLE_MODEL_VIEWER_SCRIPT").as_deref(),
        var("TURNTABLE_SAMPLE_GLB_URL").as_deref(),
        var("TURNTABLE_POLL_INTERVAL_MS").as_deref(),
    )
}

/// Read each path into an [`ImageFile`] named after its file name.
fn load_images(paths: &[PathBuf]) -> Result<Vec<ImageFile>, String> {
    paths
        .iter()
        .map(|path| {
            let bytes = std::fs::read(path)
                .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
            Ok(ImageFile::sniffed(file_name(path), bytes))
        })
        .collect()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Numbered listing of the staged files followed by the validation line.
fn describe_staging(staging: &CliStaging) -> String {
    let mut out = String::new();
    for (i, file) in staging.files().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} ({}, {} bytes)",
            i + 1,
            file.name(),
            file.content_type(),
            file.size()
        );
    }
    match staging.validation().message() {
        None => out.push_str("valid: ready to submit\n"),
        Some(message) => {
            let _ = writeln!(out, "invalid: {message}");
        }
    }
    out
}

/// One line per progress step, e.g. `Processing: active`.
fn describe_progress(job: &Job) -> String {
    job.progress()
        .iter()
        .map(|(step, state)| format!("{}: {}\n", step.label, state.as_str()))
        .collect()
}

fn run_stage(config: &AppConfig, files: &[PathBuf], submit: bool) -> Result<(), String> {
    let images = load_images(files)?;
    let offered = images.len();

    let mut staging = CliStaging::new(NoPreviews);
    let added = staging.add(images);
    if added < offered {
        eprintln!("skipped {} file(s): unsupported type or over the limit", offered - added);
    }
    print!("{}", describe_staging(&staging));

    if !submit {
        return Ok(());
    }
    if let Some(message) = staging.validation().message() {
        return Err(format!("Not submitting: {message}"));
    }

    let backend = MockBackend::from_config(config);
    let files: Vec<ImageFile> = staging.files().cloned().collect();
    staging.clear();

    let id = block_on(backend.create_job(files)).map_err(|e| format!("Error creating job: {e}"))?;
    let job = block_on(backend.get_job(&id))
        .map_err(|e| format!("Error fetching job: {e}"))?
        .ok_or_else(|| format!("Job {id} not found"))?;

    let json =
        serde_json::to_string_pretty(&job).map_err(|e| format!("Error serializing job: {e}"))?;
    println!("{json}");
    print!("{}", describe_progress(&job));
    Ok(())
}

fn run_embed(config: &AppConfig, model: Option<&str>, app_url: Option<&str>) {
    let app_url = app_url.unwrap_or(&config.app_url);
    let model = model.map(JobId::new);
    println!("{}", iframe_snippet(&embed_url(app_url, model.as_ref())));
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = runtime_config();
    tracing::debug!("using config {config:?}");

    let result = match cli.command {
        Command::Stage { files, submit } => run_stage(&config, &files, submit),
        Command::Embed { model, app_url } => {
            run_embed(&config, model.as_deref(), app_url.as_deref());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
