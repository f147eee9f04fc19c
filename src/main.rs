use anyhow::Context;
use clap::Parser;

use pagerline::cli::{plan_output, Cli, Command};
use pagerline::config::Config;
use pagerline::ui::app::App;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Plan output touches neither the config file nor the log file.
    if let Some(Command::Plan { total, page, json }) = cli.command {
        println!("{}", plan_output(total, page, json)?);
        return Ok(());
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = cli.load_config().context("failed to load configuration")?;
    let log_path = pagerline::logging::init_tracing(&config.logging)
        .context("failed to initialize logging")?;
    tracing::info!(
        log = %log_path.display(),
        config = %config_path.display(),
        config_found = config_path.exists(),
        pagers = config.pagers.len(),
        "pagerline starting"
    );

    let app = App::from_config(&config)?;
    pagerline::ui::run(app).context("terminal ui failed")
}
