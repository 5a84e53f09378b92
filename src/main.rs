use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;

use clocktime::app::Application;
use clocktime::cli::Cli;
use clocktime::config::{Config, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    debug!("Effective config: {:?}", config);

    Application::new(config).run(&cli.times)
}
