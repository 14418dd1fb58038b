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

//! Client-side configuration for reaching the OpenSDS API

use crate::infrastructure::constants::{
    DEFAULT_API_VERSION, DEFAULT_ENDPOINT, DEFAULT_TENANT_ID, DEFAULT_TIMEOUT_SECS,
    ENV_CONF_FILE, ENV_ENDPOINT, ENV_TENANT_ID, VOLUMES_PATH,
};
use crate::shared::error::OsdsError;
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::time::Duration;

/// Connection settings for the OpenSDS API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConf {
    pub endpoint: String,
    pub api_version: String,
    pub tenant_id: String,
    pub timeout_secs: u64,
    pub accept_invalid_certs: bool,
}

impl Default for ClientConf {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            tenant_id: DEFAULT_TENANT_ID.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            accept_invalid_certs: false,
        }
    }
}

impl ClientConf {
    /// Load configuration from TOML file
    pub fn from<T: AsRef<str>>(path: T) -> anyhow::Result<Self> {
        let content = read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.as_ref(), e))?;

        let conf: Self =
            toml::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))?;

        Ok(conf)
    }

    /// Resolve configuration from the process environment.
    ///
    /// Priority: `--config` > `OSDSCTL_CONF_FILE` > defaults, then the
    /// `OPENSDS_ENDPOINT` / `OPENSDS_TENANT_ID` overrides.
    pub fn load(config_file: Option<&str>) -> anyhow::Result<Self> {
        Self::load_with(config_file, |key| std::env::var(key).ok())
    }

    pub fn load_with<F>(config_file: Option<&str>, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut conf = match config_file
            .map(str::to_string)
            .or_else(|| lookup(ENV_CONF_FILE))
        {
            Some(path) => {
                tracing::debug!(path = %path, "loading client configuration");
                Self::from(&path)?
            }
            None => Self::default(),
        };

        conf.apply_env_overrides(lookup);
        conf.validate()?;
        Ok(conf)
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }

        if let Some(tenant_id) = lookup(ENV_TENANT_ID).filter(|v| !v.trim().is_empty()) {
            self.tenant_id = tenant_id.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<(), OsdsError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(OsdsError::config_error(format!(
                "endpoint must start with http:// or https://, got '{}'",
                self.endpoint
            )));
        }

        if self.api_version.trim().is_empty() {
            return Err(OsdsError::config_error("api_version must not be empty"));
        }

        if self.tenant_id.trim().is_empty() {
            return Err(OsdsError::config_error("tenant_id must not be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(OsdsError::config_error("timeout_secs must be > 0"));
        }

        Ok(())
    }

    /// Collection URL, e.g. `http://127.0.0.1:50040/v1beta/<tenant>/block/volumes`
    pub fn volumes_url(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.api_version,
            self.tenant_id,
            VOLUMES_PATH
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
