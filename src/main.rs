use clap::Parser;

mod cli;
mod commands;
mod config;
mod input;

use self::cli::{Cli, Command};

fn main() {
    let dotenv = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Ok(path) = dotenv {
        log::debug!("Loaded environment from {}", path.display());
    }
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = config::Config::try_load_from_file_or_default(cli.config.as_ref())?;
    match cli.command {
        Command::Report(args) => commands::report(&cfg, args),
        Command::Calendar(args) => commands::calendar(&cfg, args),
        Command::RedeemStatus { id, status } => commands::redeem_status(&cfg, &id, &status),
        Command::ReportStatus { id, status } => commands::report_status(&cfg, &id, &status),
        Command::Redeem(args) => commands::redeem(&cfg, args),
        Command::Delete { kind, id } => commands::delete(&cfg, kind, &id),
        Command::Notifications { action } => commands::notifications(&cfg, action),
    }
}
