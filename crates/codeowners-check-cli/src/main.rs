//! CODEOWNERS Check CLI
//!
//! A scorecard check that passes when the repository has a CODEOWNERS file
//! declaring at least one ownership rule.

use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, ValidatedConfig};
use cli::output::{write_human, write_json};
use codeowners_check_core::CodeownersCheck;

fn main() -> StdExitCode {
    let args = Args::parse();

    init_tracing(args.verbose, args.json);

    let config = ValidatedConfig::from_args(&args);
    let exit_code = run(&config);

    StdExitCode::from(u8::from(exit_code))
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

/// Run the check and report its result.
fn run(config: &ValidatedConfig) -> ExitCode {
    debug!("Validated configuration: {:?}", config);
    info!("Repository path: {}", config.check_config.repo_path.display());

    let check = CodeownersCheck::new(config.check_config.clone());
    let result = check.run();

    let written = if config.json_output {
        write_json(&result, &mut io::stdout().lock())
    } else {
        write_human(
            &result,
            io::stdout().lock(),
            io::stderr().lock(),
            config.stdout_colors,
            config.stderr_colors,
        )
    };

    if let Err(e) = written {
        error!("Failed to write output: {}", e);
        return ExitCode::Failure;
    }

    let exit_code = ExitCode::for_result(&result);
    debug!("Check '{}' finished with {:?}", check.name(), exit_code);
    exit_code
}
