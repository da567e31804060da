use anyhow::Context;
use clap::Parser;
use live_scoreboard::app::fixture;
use live_scoreboard::config::toml_config::TomlConfig;
use live_scoreboard::config::{OutputFormat, Settings};
use live_scoreboard::utils::{logger, validation::Validate};
use live_scoreboard::{CliConfig, Scoreboard};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => TomlConfig::default(),
    };

    file_config.validate().context("invalid configuration file")?;
    cli.validate().context("invalid command line")?;

    let settings = Settings::resolve(&file_config, cli.format.as_deref(), cli.verbose, cli.json_logs);
    logger::init_cli_logger(&settings.log_directive, settings.json_logs);

    tracing::info!("🚀 Starting scoreboard demo");
    tracing::debug!("Resolved settings: {:?}", settings);

    let mut board = Scoreboard::new();
    fixture::load_world_cup(&mut board)?;

    match settings.format {
        OutputFormat::Json => {
            let summary = board.get_summary();
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text if settings.numbered => {
            for line in board.render_summary() {
                println!("{}", line);
            }
        }
        OutputFormat::Text => {
            for row in board.get_summary() {
                println!("{}", row);
            }
        }
    }

    tracing::info!("✅ Printed summary of {} matches", board.len());
    Ok(())
}
