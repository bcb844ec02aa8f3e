// Mon Oct 19 2026 - Alex

use clap::Parser;
use colored::Colorize;
use melee_state_decoder::{
    config::Config,
    ui::cli::Args,
    utils::LoggingUtils,
};

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    Ok(match &args.log_level {
        Some(level) => config.with_log_level(level),
        None => config,
    })
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} Failed to load config: {:#}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    let level = if args.verbose > 0 {
        LoggingUtils::level_from_verbosity(args.verbose as usize + 1)
    } else {
        LoggingUtils::level_from_str(&config.log_level)
    };
    LoggingUtils::init_logger(level, !args.no_color);

    let executor = args.command.executor();
    log::debug!("running {} command", executor.name());

    if let Err(e) = executor.execute(&config) {
        eprintln!("{} {} failed: {:#}", "[!]".red(), executor.name(), e);
        std::process::exit(1);
    }
}
