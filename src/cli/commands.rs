// CLI command definitions

use super::volume::VolumeCommand;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "osdsctl",
    version,
    about = "Command line client for the OpenSDS storage controller",
    long_about = "A CLI tool for managing OpenSDS block volumes through the OpenSDS REST API"
)]
pub struct CliArgs {
    /// Path to client configuration file (TOML)
    /// If not provided, OSDSCTL_CONF_FILE is used, then built-in defaults
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Manage volumes in the cluster
    Volume(VolumeCommand),
}
