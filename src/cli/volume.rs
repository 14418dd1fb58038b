//! Volume management commands

use super::commands::CliArgs;
use super::display::{FormatterList, KeyList, TableRenderer};
use crate::domain::volume::{
    create_request, delete_request, parse_size, update_request, CreateVolumeOptions, VolumeSpec,
};
use crate::infrastructure::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::infrastructure::opensds::VolumeClient;
use crate::shared::error::VolumeCommandError;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io::{self, IsTerminal, Write};

/// Fields shown for a single volume (create, show, update)
pub const VOLUME_DICT_KEYS: KeyList<'static> = &[
    "Id",
    "CreatedAt",
    "UpdatedAt",
    "Name",
    "Description",
    "Size",
    "AvailabilityZone",
    "Status",
    "PoolId",
    "ProfileId",
    "Metadata",
];

/// Fields shown per volume in `volume list`
pub const VOLUME_LIST_KEYS: KeyList<'static> = &[
    "Id",
    "Name",
    "Description",
    "Size",
    "AvailabilityZone",
    "Status",
    "PoolId",
    "ProfileId",
];

#[derive(Parser, Debug, Clone)]
pub struct VolumeCommand {
    /// The name of profile configured by admin
    #[arg(long, short = 'p', global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Option<VolumeSubcommand>,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum VolumeSubcommand {
    /// Create a volume in the cluster
    Create(CreateVolumeCommand),

    /// Show a volume in the cluster
    Show(ShowVolumeCommand),

    /// List all volumes in the cluster
    List(ListVolumeCommand),

    /// Delete a volume in the cluster
    Delete(DeleteVolumeCommand),

    /// Update a volume in the cluster
    Update(UpdateVolumeCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct CreateVolumeCommand {
    /// Volume size in GB
    #[arg(value_name = "SIZE")]
    pub args: Vec<String>,

    /// The name of created volume
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// The description of created volume
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// The availability zone of created volume
    #[arg(long, short = 'a')]
    pub az: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowVolumeCommand {
    /// Volume ID
    #[arg(value_name = "ID")]
    pub args: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListVolumeCommand {
    #[arg(hide = true)]
    pub args: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteVolumeCommand {
    /// Volume ID
    #[arg(value_name = "ID")]
    pub args: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct UpdateVolumeCommand {
    /// Volume ID
    #[arg(value_name = "ID")]
    pub args: Vec<String>,

    /// The name of updated volume
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// The description of updated volume
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

/// A volume operation whose arguments have been checked, ready to send
#[derive(Debug, Clone, PartialEq)]
pub enum VolumeRequest {
    Create(VolumeSpec),
    Show(String),
    List,
    Delete { id: String, spec: VolumeSpec },
    Update { id: String, spec: VolumeSpec },
}

impl VolumeCommand {
    /// Run the selected subcommand and return the process exit code.
    ///
    /// Arguments are validated before `connect` is called, so a usage or
    /// size error is reported even when the client cannot be configured.
    /// Rendered output goes to `out`; errors and usage text go to `err`.
    pub async fn execute<C, F>(&self, connect: F, out: &mut dyn Write, err: &mut dyn Write) -> u8
    where
        C: VolumeClient,
        F: FnOnce() -> anyhow::Result<C>,
    {
        let Some(command) = &self.command else {
            write_usage(err, None);
            return EXIT_FAILURE;
        };

        let result = match command.prepare(self.profile.as_deref()) {
            Ok(request) => match connect() {
                Ok(client) => request.send(&client).await,
                Err(e) => Err(VolumeCommandError::Config(e)),
            },
            Err(e) => Err(e),
        };

        match result {
            Ok(output) => match writeln!(out, "{}", output) {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    tracing::error!(error = %e, "failed to write command output");
                    EXIT_FAILURE
                }
            },
            Err(e) => {
                report_error(&e, err);
                EXIT_FAILURE
            }
        }
    }
}

impl VolumeSubcommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Show(_) => "show",
            Self::List(_) => "list",
            Self::Delete(_) => "delete",
            Self::Update(_) => "update",
        }
    }

    /// Check positional args and build the request body. Never touches the network.
    pub fn prepare(&self, profile: Option<&str>) -> Result<VolumeRequest, VolumeCommandError> {
        tracing::debug!(command = self.name(), "validating volume command");
        match self {
            Self::Create(cmd) => cmd.prepare(profile),
            Self::Show(cmd) => cmd.prepare(),
            Self::List(cmd) => cmd.prepare(),
            Self::Delete(cmd) => cmd.prepare(profile),
            Self::Update(cmd) => cmd.prepare(),
        }
    }
}

impl CreateVolumeCommand {
    pub fn prepare(&self, profile: Option<&str>) -> Result<VolumeRequest, VolumeCommandError> {
        let args = expect_args("create", &self.args, 1)?;
        let size = parse_size(&args[0])?;

        Ok(VolumeRequest::Create(create_request(
            size,
            &CreateVolumeOptions {
                name: self.name.as_deref(),
                description: self.description.as_deref(),
                availability_zone: self.az.as_deref(),
                profile_id: profile,
            },
        )))
    }
}

impl ShowVolumeCommand {
    pub fn prepare(&self) -> Result<VolumeRequest, VolumeCommandError> {
        let args = expect_args("show", &self.args, 1)?;
        Ok(VolumeRequest::Show(args[0].clone()))
    }
}

impl ListVolumeCommand {
    pub fn prepare(&self) -> Result<VolumeRequest, VolumeCommandError> {
        expect_args("list", &self.args, 0)?;
        Ok(VolumeRequest::List)
    }
}

impl DeleteVolumeCommand {
    pub fn prepare(&self, profile: Option<&str>) -> Result<VolumeRequest, VolumeCommandError> {
        let args = expect_args("delete", &self.args, 1)?;
        Ok(VolumeRequest::Delete {
            id: args[0].clone(),
            spec: delete_request(profile),
        })
    }
}

impl UpdateVolumeCommand {
    pub fn prepare(&self) -> Result<VolumeRequest, VolumeCommandError> {
        let args = expect_args("update", &self.args, 1)?;
        Ok(VolumeRequest::Update {
            id: args[0].clone(),
            spec: update_request(self.name.as_deref(), self.description.as_deref()),
        })
    }
}

impl VolumeRequest {
    /// Send the request and render the response for stdout.
    pub async fn send<C>(&self, client: &C) -> Result<String, VolumeCommandError>
    where
        C: VolumeClient + ?Sized,
    {
        tracing::debug!(request = ?self, "sending volume request");
        match self {
            Self::Create(spec) => Ok(render_volume(&client.create_volume(spec).await?)),
            Self::Show(id) => Ok(render_volume(&client.get_volume(id).await?)),
            Self::List => {
                let volumes = client.list_volumes().await?;
                Ok(TableRenderer::new().render_list(
                    &volumes,
                    VOLUME_LIST_KEYS,
                    &FormatterList::new(),
                ))
            }
            Self::Delete { id, spec } => {
                client.delete_volume(id, spec).await?;
                Ok(format!("Delete volume({}) success.", id))
            }
            Self::Update { id, spec } => Ok(render_volume(&client.update_volume(id, spec).await?)),
        }
    }
}

fn expect_args<'a>(
    command: &'static str,
    args: &'a [String],
    expected: usize,
) -> Result<&'a [String], VolumeCommandError> {
    if args.len() != expected {
        return Err(VolumeCommandError::usage(command, expected, args.len()));
    }
    Ok(args)
}

fn render_volume(volume: &VolumeSpec) -> String {
    TableRenderer::new().render_dict(volume, VOLUME_DICT_KEYS, &FormatterList::new())
}

/// `Error:` prefix, colored only when stderr is a terminal
fn error_prefix(colorize: bool) -> String {
    if colorize {
        "Error:".red().bold().to_string()
    } else {
        "Error:".to_string()
    }
}

fn report_error(error: &VolumeCommandError, err: &mut dyn Write) {
    let result = match error {
        VolumeCommandError::Usage {
            command,
            expected,
            actual,
        } => {
            tracing::debug!(command, expected, actual, "wrong number of positional args");
            writeln!(err, "{}", error)
        }
        _ => writeln!(
            err,
            "{} {}",
            error_prefix(io::stderr().is_terminal()),
            error
        ),
    };

    if let Err(e) = result {
        tracing::warn!(error = %e, "failed to write error message");
    }

    if let VolumeCommandError::Usage { command, .. } = error {
        write_usage(err, Some(*command));
    }
}

/// Write help for `volume`, or for one of its subcommands, to `err`.
pub fn write_usage(err: &mut dyn Write, subcommand: Option<&str>) {
    if let Err(e) = write!(err, "{}", usage_text(subcommand)) {
        tracing::warn!(error = %e, "failed to write usage");
    }
}

pub fn usage_text(subcommand: Option<&str>) -> String {
    let root = CliArgs::command();
    let bin_name = root.get_name().to_string();
    let mut root = root.bin_name(bin_name);
    root.build();

    let Some(volume) = root.find_subcommand_mut("volume") else {
        return String::new();
    };

    let target = match subcommand {
        Some(name) => volume.find_subcommand_mut(name),
        None => Some(volume),
    };

    target
        .map(|cmd| cmd.render_help().to_string())
        .unwrap_or_default()
}
