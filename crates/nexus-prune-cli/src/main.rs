mod commands;
mod logging;
mod progress;

use std::process;

use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands, ConfigOverrides, RunArgs};
use dotenv::dotenv;
use nexus_prune_core::groups::resolve_groups;
use nexus_prune_core::shuffle::shuffle;
use nexus_prune_core::{AppConfig, NexusClient, RetentionEngine, RunOutcome};
use progress::CliReporter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

const EXIT_OK: i32 = 0;
const EXIT_EXPECTATION_EXCEEDED: i32 = 1;
const EXIT_FATAL: i32 = 2;

fn main() {
    let code = real_main();
    process::exit(code);
}

/// Holds the log guard, so the file writer is flushed before `process::exit`.
fn real_main() -> i32 {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let result = match args.command {
        Some(Commands::Run(run_args)) => run(run_args),
        Some(Commands::PrintConfig(overrides)) => print_config(overrides),
        None => {
            let _ = Cli::command().print_long_help();
            Ok(EXIT_OK)
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            error!("Error: {:#}", err);
            EXIT_FATAL
        }
    }
}

fn effective_config(overrides: ConfigOverrides) -> anyhow::Result<AppConfig> {
    let mut config = nexus_prune_core::config::load_configuration()?;
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn print_config(overrides: ConfigOverrides) -> anyhow::Result<i32> {
    let config = effective_config(overrides)?;
    println!("Configuration: {:#?}", config.redacted());
    Ok(EXIT_OK)
}

fn run(args: RunArgs) -> anyhow::Result<i32> {
    let config = effective_config(args.overrides)?;
    let mut groups = resolve_groups(&args.groups)?;

    // If multiple instances are running, avoid syncing on generating Maven metadata
    let mut rng = StdRng::from_entropy();
    shuffle(&mut groups, &mut rng);

    info!(
        "{} groups against {}, delete={}, throttle={}, expect={}",
        groups.len(),
        config.nexus.base_url(),
        config.retention.delete,
        config.retention.throttle,
        config.retention.expect,
    );

    let client = NexusClient::new(config.nexus.clone())?;
    let engine = RetentionEngine::new(client, config.search.clone(), config.retention.clone());
    let summary = engine.run(&groups, &CliReporter)?;

    info!(
        "{} artifacts deleted",
        format!("{}", summary.state.actions).green()
    );

    let code = match summary.outcome {
        RunOutcome::Completed => EXIT_OK,
        RunOutcome::ThrottleReached { actions } => {
            info!("Stopped after throttle limit of {} deletions", actions);
            EXIT_OK
        }
        RunOutcome::ExpectationExceeded { found, expect } => {
            eprintln!(
                "{}",
                format!("Found {} artifacts but expect is {}, aborting", found, expect).red()
            );
            EXIT_EXPECTATION_EXCEEDED
        }
    };
    Ok(code)
}
