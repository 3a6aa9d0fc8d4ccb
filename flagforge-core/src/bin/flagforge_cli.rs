//! FlagForge CLI - JSON bridge to the flag compiler
//!
//! Commands: layers, validate, compile
//! Outputs JSON to stdout, logs to stderr (RUST_LOG)
//! Exit 1 on bad input or I/O, exit 2 on validation failure

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use flagforge_core::{FlagPipeline, FlagRequest, LayerKind, PipelineError};

const VALIDATION_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(name = "flagforge-cli", version)]
#[command(about = "FlagForge CLI - Flag Template Compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List layer kinds in paint order
    Layers,

    /// Validate a flag request
    Validate {
        /// JSON payload (FlagRequest), or @path to read it from a file
        #[arg(short, long)]
        payload: String,
    },

    /// Compile a flag request and write the SVG
    Compile {
        /// JSON payload (FlagRequest), or @path to read it from a file
        #[arg(short, long)]
        payload: String,

        /// Output directory
        #[arg(short, long, default_value = "public/flags")]
        out_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pipeline = FlagPipeline::new();

    match cli.command {
        Commands::Layers => {
            let layers: Vec<_> = LayerKind::ALL.iter().map(|kind| kind.key()).collect();
            emit(&json!(layers));
            ExitCode::SUCCESS
        }

        Commands::Validate { payload } => {
            let request = match load_request(&payload) {
                Ok(r) => r,
                Err(e) => {
                    emit(&json!({"valid": false, "error": format!("Invalid payload: {}", e)}));
                    return ExitCode::FAILURE;
                }
            };

            match pipeline.validate(&request) {
                Ok(report) => {
                    let valid = !report.is_blocking();
                    emit(&json!({
                        "valid": valid,
                        "errors": report.errors,
                        "warnings": report.warnings,
                    }));
                    if valid {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::from(VALIDATION_FAILURE)
                    }
                }
                Err(e) => {
                    emit(&json!({"valid": false, "error": e.to_string()}));
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Compile { payload, out_dir } => {
            let request = match load_request(&payload) {
                Ok(r) => r,
                Err(e) => {
                    emit(&json!({"success": false, "error": format!("Invalid payload: {}", e)}));
                    return ExitCode::FAILURE;
                }
            };

            let compiled = match pipeline.compile(&request) {
                Ok(c) => c,
                Err(e) => {
                    emit(&json!({"success": false, "error": e.to_string()}));
                    return match e {
                        PipelineError::ValidationFailed(_) => ExitCode::from(VALIDATION_FAILURE),
                        _ => ExitCode::FAILURE,
                    };
                }
            };

            match compiled.write_to_dir(&out_dir) {
                Ok(path) => {
                    emit(&json!({
                        "success": true,
                        "path": path.display().to_string(),
                        "template": compiled.summary,
                        "flag": compiled,
                    }));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    emit(&json!({"success": false, "error": format!("Failed to write flag: {}", e)}));
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Inline JSON, or `@path` to a JSON file.
fn load_request(payload: &str) -> Result<FlagRequest, String> {
    let text = match payload.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?,
        None => payload.to_string(),
    };
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

fn emit(value: &Value) {
    println!("{:#}", value);
}
