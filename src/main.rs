//! `tfmlog`: emit TFMLOG lines and metrics from shell scripts.
//!
//! ```text
//! tfmlog info "job" 42 "finished"
//! TFMLOG:{"level":"INFO ","details":"job 42 finished"}
//!
//! tfmlog metric latency 42.5
//! TFMLOG:{"level":"INFO ","details":"Pushing metric: tfm.latency, value: 42.5"}
//! ```
//!
//! Stdout carries only facade lines; diagnostics go to stderr.

use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use tfm_observability::config::{self, FacadeConfig};
use tfm_observability::facade::{ErrorObject, Facade, HasMessage, StructuredError, TfmFacade};
use tfm_observability::observability::{init_logging, init_metrics};

#[derive(Parser)]
#[command(name = "tfmlog")]
#[command(about = "Emit TFMLOG lines and tfm.* metrics", long_about = None)]
struct Cli {
    /// TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit DEBUG lines (overrides config and TFM_VERBOSE).
    #[arg(short, long)]
    verbose: bool,

    /// Print the Prometheus exposition to stderr when done.
    #[arg(long)]
    dump_metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log at ERROR
    Error { values: Vec<String> },
    /// Log at INFO
    Info { values: Vec<String> },
    /// Log at WARN
    Warn { values: Vec<String> },
    /// Log at DEBUG (verbose only)
    Debug { values: Vec<String> },
    /// Push tfm.<name>
    Metric { name: String, value: f64 },
    /// Log values for an error carrying MESSAGE
    ErrorText { message: String, values: Vec<String> },
    /// Log values for an error described by a JSON document
    ErrorJson { document: String, values: Vec<String> },
}

struct CliMessage(String);

impl HasMessage for CliMessage {
    fn message(&self) -> String {
        self.0.clone()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => FacadeConfig::default(),
    };
    config::apply_env_overrides(&mut config);
    if cli.verbose {
        config.verbose = true;
    }

    let _ = init_logging(&config.observability);
    tracing::debug!(verbose = config.verbose, "Configuration loaded");

    let handle = init_metrics(&config.observability)?;

    let facade: Arc<dyn Facade> = Arc::new(TfmFacade::from_config(&config));
    run(facade.as_ref(), cli.command);

    if cli.dump_metrics {
        match handle {
            Some(handle) => eprint!("{}", handle.render()),
            None => tracing::warn!("No local metrics recorder to dump"),
        }
    }

    Ok(())
}

fn run(facade: &dyn Facade, command: Commands) {
    match command {
        Commands::Error { values } => facade.log_error(&as_display(&values)),
        Commands::Info { values } => facade.log_info(&as_display(&values)),
        Commands::Warn { values } => facade.log_warn(&as_display(&values)),
        Commands::Debug { values } => facade.log_debug(&as_display(&values)),
        Commands::Metric { name, value } => facade.add_metric(&name, value),
        Commands::ErrorText { message, values } => {
            let err = CliMessage(message);
            facade.log_error_with_interface(ErrorObject::Message(&err), &as_display(&values));
        }
        Commands::ErrorJson { document, values } => {
            let structured = match serde_json::from_str::<serde_json::Value>(&document) {
                Ok(value) => StructuredError::new(&value),
                Err(_) => StructuredError::new(&document),
            };
            facade.log_error_with_interface(structured.as_object(), &as_display(&values));
        }
    }
}

fn as_display(values: &[String]) -> Vec<&dyn Display> {
    values.iter().map(|v| v as &dyn Display).collect()
}
