//! Changelog Validator CLI
//!
//! A command-line tool for validating RPM-style package changelogs.

use clap::Parser;
use futures::future::join_all;
use std::io::{self, IsTerminal};
use std::process::ExitCode as StdExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::signal;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;

use changelog_validator_core::report::MAX_ERRORS;
use changelog_validator_core::validate::checks::{CheckConfig, CheckContext, CheckRunner};
use cli::Args;
use cli::config::{ConfigError, ExitCode, ValidatedConfig};
use cli::input::{Source, read_source};
use cli::output::{FileReport, HumanOutput, Reports};

#[tokio::main]
async fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json);

    // Set up signal handling for graceful shutdown
    let terminated = Arc::new(AtomicBool::new(false));
    let terminated_clone = terminated.clone();

    tokio::spawn(async move {
        let ctrl_c = signal::ctrl_c();
        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                }
                Err(e) => {
                    warn!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };
        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received SIGINT, shutting down...");
            }
            _ = terminate => {
                info!("Received SIGTERM, shutting down...");
            }
        }

        terminated_clone.store(true, Ordering::SeqCst);
    });

    // Run the validator
    let exit_code = run(args, &terminated).await;

    // Check if we were terminated by signal
    if terminated.load(Ordering::SeqCst) {
        return StdExitCode::from(ExitCode::Terminated as u8);
    }

    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Reads and checks one changelog.
async fn check_source(
    source: Source,
    config: Arc<CheckConfig>,
) -> Result<FileReport, ConfigError> {
    let text = read_source(&source).await?;
    debug!("Read {} ({} bytes)", source, text.len());

    let ctx = CheckContext::new(&text, &config);
    let checks = CheckRunner::with_all_checks().run(&ctx);
    for (name, outcome) in &checks {
        debug!("{}: check '{}' -> {:?}", source, name, outcome);
    }

    Ok(FileReport::new(source.to_string(), ctx.validation, checks))
}

/// Run the validator with the given arguments.
async fn run(args: Args, terminated: &AtomicBool) -> ExitCode {
    let stderr_colors = !args.json && io::stderr().is_terminal();

    // Validate configuration
    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            write_error(&e, stderr_colors);
            return ExitCode::StartupFailure;
        }
    };

    let use_colors = !config.json_output && io::stdout().is_terminal();

    debug!("Validated configuration: {:?}", config);
    info!("Validating {} changelog(s)", config.sources.len());

    // Validate every changelog in its own task
    let check_config = Arc::new(config.check_config.clone());
    let tasks = config.sources.iter().cloned().map(|source| {
        let check_config = Arc::clone(&check_config);
        tokio::spawn(check_source(source, check_config))
    });
    let joined = join_all(tasks).await;

    // Check for termination
    if terminated.load(Ordering::SeqCst) {
        return ExitCode::Terminated;
    }

    let mut reports = Reports::new();
    let mut failed = false;
    for result in joined {
        match result.map_err(ConfigError::from).and_then(|r| r) {
            Ok(report) => reports.add(report),
            Err(e) => {
                write_error(&e, stderr_colors);
                failed = true;
            }
        }
    }
    if failed {
        return ExitCode::StartupFailure;
    }

    // Output results
    let mut stdout = io::stdout().lock();
    if config.json_output {
        if let Err(e) = reports.write_json(&mut stdout) {
            error!("Failed to write JSON output: {}", e);
            return ExitCode::StartupFailure;
        }
    } else if let Err(e) =
        reports.write_human(&mut stdout, use_colors, config.check_config.max_errors)
    {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    // Determine exit code
    config.exit_code_for_results(reports.has_errors(), reports.has_warnings())
}

/// Write an error message to stderr.
fn write_error(error: &ConfigError, use_colors: bool) {
    let mut output = HumanOutput::new(io::stderr().lock(), use_colors, MAX_ERRORS);
    let _ = output.write_error(&error.to_string());
}
