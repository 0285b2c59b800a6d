//! Competency report CLI.
//!
//! Thin shell over the pipeline: parse a record from JSON, generate the
//! PDF, report what was written. HTTP serving, validation, and storage
//! upload live in other services; this binary is the local entry point the
//! same flow they call.

use clap::{Args, Parser, Subcommand};
use cr_core::{PipelineConfig, ReportPipeline};
use cr_render::{Discovery, EngineLocator, RenderConfig};
use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Competency report generator.
#[derive(Parser)]
#[command(name = "cr-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands.
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Args, Debug)]
struct EngineOpts {
    /// Explicit rendering engine executable
    #[arg(long, env = "REPORT_ENGINE_PATH")]
    engine_path: Option<PathBuf>,

    /// Managed environment: fall back to the engine's bundled default
    /// when discovery finds nothing
    #[arg(long, env = "REPORT_MANAGED_ENV")]
    managed: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a PDF report from a JSON record
    Generate {
        /// Report record JSON file
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Destination PDF path (directory must exist)
        #[arg(long, short = 'o')]
        output: PathBuf,

        /// Page load timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,

        /// Image settle delay in milliseconds
        #[arg(long, default_value_t = 1000)]
        settle_ms: u64,

        #[command(flatten)]
        engine: EngineOpts,
    },

    /// Report which discovery strategy finds a rendering engine
    CheckEngine {
        #[command(flatten)]
        engine: EngineOpts,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(global: &GlobalOpts) {
    let default_level = if global.quiet {
        "error"
    } else {
        match global.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render_config(engine: &EngineOpts, timeout_secs: u64, settle_ms: u64) -> RenderConfig {
    let mut config = RenderConfig::default()
        .with_managed_environment(engine.managed)
        .with_load_timeout_secs(timeout_secs)
        .with_settle_delay_ms(settle_ms);
    if let Some(path) = &engine.engine_path {
        config = config.with_engine_path(path.clone());
    }
    config
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Generate {
            input,
            output,
            timeout_secs,
            settle_ms,
            engine,
        } => {
            let json = std::fs::read_to_string(&input)
                .map_err(|e| format!("could not read {}: {e}", input.display()))?;

            let config = PipelineConfig {
                render: render_config(&engine, timeout_secs, settle_ms),
                ..PipelineConfig::default()
            };
            let pipeline = ReportPipeline::new(config)?;
            let artifact = pipeline.generate_from_json(&json, &output)?;

            let report_id = uuid::Uuid::new_v4().to_string();
            let summary = serde_json::json!({
                "reportId": report_id,
                "path": artifact.path,
                "bytes": artifact.bytes,
                "storageKey": cr_common::storage_key(&report_id, chrono::Utc::now()),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Commands::CheckEngine { engine } => {
            let config = render_config(&engine, 30, 1000);
            let locator = EngineLocator::from_config(&config);
            match locator.locate()? {
                Discovery::Executable { path, strategy } => {
                    println!(
                        "{}",
                        serde_json::json!({
                            "found": true,
                            "strategy": strategy,
                            "path": path,
                        })
                    );
                }
                Discovery::BundledDefault => {
                    println!(
                        "{}",
                        serde_json::json!({
                            "found": true,
                            "strategy": "bundled-default",
                        })
                    );
                }
            }
            Ok(())
        }
    }
}
