//! todos - month/year scoped todo lists
//!
//! Seeds an in-memory list, runs one operation and renders the result.

use clap::Parser;
use todos::cli::Cli;
use todos::config::Config;
use todos::output::{emit_error, infer_command_name_from_args};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Tracing is opt-in via RUST_LOG.
    // Ignore invalid or huge filters so startup never fails on them.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let command = infer_command_name_from_args();
    let cli = Cli::parse();
    let config = match cli.load_config() {
        Ok(config) => config,
        Err(err) => {
            let _ = emit_error(&command, &err, cli.json_output(&Config::default()));
            std::process::exit(err.exit_code());
        }
    };

    let json = cli.json_output(&config);
    if let Err(err) = cli.run(config) {
        let _ = emit_error(&command, &err, json);
        std::process::exit(err.exit_code());
    }
}
