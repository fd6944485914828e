use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reviews_reconcile::{
    cli::Opts,
    config::Config,
    error::{ReconcileError, EXIT_FAILURE, EXIT_SUCCESS},
    reconcile::run_check,
};

fn main() {
    // Arity and option errors exit with status 2 here
    let opts = Opts::parse();

    let code = match run(&opts) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.downcast_ref::<ReconcileError>()
                .map(ReconcileError::exit_code)
                .unwrap_or(EXIT_FAILURE)
        }
    };

    std::process::exit(code);
}

fn init_tracing(verbose: bool, ansi: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi),
        )
        .init();
}

fn run(opts: &Opts) -> Result<i32> {
    let config = Config::load().context("Failed to load configuration")?;

    let color = opts.use_color(&config);
    init_tracing(opts.verbose, color);
    if !color {
        colored::control::set_override(false);
    }

    let format = opts.output_format(&config);
    tracing::debug!(?config, %format, "Configuration loaded");

    let options = opts.check_options(&config)?;
    let report = run_check(&options)?;

    let rendered = report.render(format)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(if report.success {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}
