use crate::config::toml_config::OUTPUT_FORMATS;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "scoreboard")]
#[command(about = "Replays a set of live matches and prints the ranked summary")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Summary output format (text or json)
    #[arg(short, long)]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.format {
            validate_one_of("--format", format, &OUTPUT_FORMATS)?;
        }
        Ok(())
    }
}
