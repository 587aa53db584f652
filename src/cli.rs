use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "vimi")]
#[command(version = "0.1.0")]
#[command(about = "A small, accessible text editor")]
pub struct CliArgs {
    /// Configuration file (defaults to <config dir>/vimi/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

pub fn parse_args() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}
