//! protoc-gen-kit
//!
//! protoc plugin entry point:
//! - reads a `CodeGeneratorRequest` from stdin (or `--request <FILE>`)
//! - builds the template-ready model of the last file in dependency order
//! - writes a `CodeGeneratorResponse` carrying the rendered model to stdout
//!
//! Diagnostics go to stderr; stdout is reserved for the response. On any
//! failure the process exits with status 1 and writes nothing to stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod plugin;

use config::PluginConfig;

#[derive(Parser)]
#[command(name = "protoc-gen-kit")]
#[command(
    author,
    version,
    about = "protoc plugin: extract a template-ready service model from .proto files"
)]
struct Cli {
    /// Read the CodeGeneratorRequest from a file instead of stdin.
    #[arg(long)]
    request: Option<PathBuf>,

    /// Print the model as JSON instead of writing a CodeGeneratorResponse.
    #[arg(long)]
    dump_model: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("protoc-gen-kit: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let bytes = plugin::read_request_bytes(cli.request.as_deref())?;
    let request = protokit_schema::decode_request(&bytes)?;
    let config = PluginConfig::from_parameters(&request.parameters)?;
    init_tracing(config.log.as_deref());

    tracing::debug!(
        files = request.files.len(),
        compiler = request.compiler_version.as_deref().unwrap_or("unknown"),
        "request decoded"
    );

    let (model, response) = plugin::generate(&request, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.dump_model {
        let json = serde_json::to_string_pretty(&model).context("failed to serialize model")?;
        writeln!(out, "{json}").context("failed to write model")?;
        return Ok(());
    }
    plugin::write_response(&response, &mut out)
}

/// Filter precedence: `log` plugin parameter, then `PROTOKIT_LOG`, then `warn`.
fn init_tracing(directive: Option<&str>) {
    let directive = directive
        .map(str::to_string)
        .or_else(|| std::env::var("PROTOKIT_LOG").ok())
        .unwrap_or_else(|| "warn".to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
