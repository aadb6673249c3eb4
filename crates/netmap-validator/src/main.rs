//! netmapcheck - Network mapping validator for VM import requests
//!
//! Runs the network mapping validator over an import request file against a
//! catalog of network attachment definitions loaded from disk.
//!
//! Exit codes: 0 when the mapping is acceptable, 1 when failures were found,
//! 2 when the inputs could not be loaded.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vmimport_netmap::{
    ImportRequest, NetworkMappingValidator, StaticProvider, ValidationFailures, ValidatorConfig,
};

/// Output format for validation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Validate the network mapping of a VM import request
#[derive(Parser, Debug)]
#[command(name = "netmapcheck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Import request file (YAML, or JSON with a .json extension)
    #[arg(short = 'r', long)]
    request: PathBuf,

    /// Network attachment definition manifests (YAML list or List object)
    #[arg(short = 'a', long)]
    attachments: Option<PathBuf>,

    /// Validator configuration file (TOML)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Default namespace for targets without one (overrides request and config)
    #[arg(short = 'n', long)]
    namespace: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Log level (trace, debug, info, warn, error), RUST_LOG takes precedence
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,
}

const EXIT_VALID: u8 = 0;
const EXIT_FAILURES: u8 = 1;
const EXIT_LOAD_ERROR: u8 = 2;

/// Initializes tracing/logging subsystem
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<ValidationFailures> {
    let config = match &args.config {
        Some(path) => ValidatorConfig::from_file(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => ValidatorConfig::default(),
    };

    let request = ImportRequest::from_file(&args.request)
        .with_context(|| format!("loading import request {}", args.request.display()))?;

    let provider = match &args.attachments {
        Some(path) => StaticProvider::from_file(path)
            .with_context(|| format!("loading attachment definitions {}", path.display()))?,
        None => StaticProvider::new(),
    };

    let namespace = request.target_namespace(args.namespace.as_deref(), &config);

    info!(
        nics = request.nics.len(),
        mappings = request.mapping().map_or(0, |m| m.len()),
        attachments = provider.len(),
        namespace = %namespace,
        "Validating network mapping"
    );

    let validator = NetworkMappingValidator::with_config(provider, &config);
    Ok(validator.validate_network_mapping(&request.nics, request.mapping(), &namespace))
}

fn print_failures(failures: &ValidationFailures, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(failures)?);
        }
        OutputFormat::Text => {
            if failures.is_empty() {
                println!("Network mapping is valid");
            }
            for failure in failures {
                println!("{failure}");
            }
        }
    }
    Ok(())
}

fn exit_status(failures: &ValidationFailures) -> u8 {
    if failures.blocks_import() {
        EXIT_FAILURES
    } else {
        EXIT_VALID
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    let failures = match run(&args) {
        Ok(failures) => failures,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("netmapcheck: {:#}", e);
            return ExitCode::from(EXIT_LOAD_ERROR);
        }
    };

    if let Err(e) = print_failures(&failures, args.output) {
        eprintln!("netmapcheck: {:#}", e);
        return ExitCode::from(EXIT_LOAD_ERROR);
    }

    ExitCode::from(exit_status(&failures))
}
