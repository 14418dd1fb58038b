// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod commands;
pub mod display;
pub mod volume;

pub use commands::{CliArgs, Commands};

use crate::domain::config::ClientConf;
use crate::infrastructure::opensds::{HttpVolumeClient, VolumeClient};
use std::io::{self, Write};

/// Execute parsed arguments against the configured OpenSDS endpoint.
pub async fn run(args: CliArgs) -> u8 {
    let mut out = io::stdout();
    let mut err = io::stderr();
    run_with(args, connect, &mut out, &mut err).await
}

/// Dispatch `args`, building the client with `connect` once the arguments are valid.
pub async fn run_with<C, F>(
    args: CliArgs,
    connect: F,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> u8
where
    C: VolumeClient,
    F: FnOnce(Option<&str>) -> anyhow::Result<C>,
{
    let CliArgs { config, command } = args;
    match command {
        Commands::Volume(cmd) => cmd.execute(|| connect(config.as_deref()), out, err).await,
    }
}

/// Load the client configuration and build the HTTP client.
pub fn connect(config_file: Option<&str>) -> anyhow::Result<HttpVolumeClient> {
    let conf = ClientConf::load(config_file)?;
    tracing::debug!(endpoint = %conf.endpoint, tenant = %conf.tenant_id, "using OpenSDS endpoint");

    HttpVolumeClient::new(&conf)
        .map_err(|e| anyhow::anyhow!("Failed to create OpenSDS client: {}", e))
}
