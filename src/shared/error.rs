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

use thiserror::Error;
pub type Result<T> = std::result::Result<T, OsdsError>;

/// Errors raised while talking to the OpenSDS API or preparing a request.
#[derive(Error, Debug)]
pub enum OsdsError {
    #[error("Network error talking to {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP {status} at {url}: {message}")]
    Http {
        url: String,
        status: u16,
        message: String,
    },

    #[error("Could not decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl OsdsError {
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn http(url: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            url: url.into(),
            status,
            message: message.into(),
        }
    }
}

/// Failures of a single `volume` subcommand invocation.
///
/// Every variant maps to exit code 1; they differ only in what gets printed.
#[derive(Error, Debug)]
pub enum VolumeCommandError {
    #[error("The number of args is not correct!")]
    Usage {
        command: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("error parsing size {value}: {reason}")]
    InvalidSize { value: String, reason: String },

    #[error(transparent)]
    Remote(#[from] OsdsError),

    #[error("{0:#}")]
    Config(anyhow::Error),
}

impl VolumeCommandError {
    pub fn usage(command: &'static str, expected: usize, actual: usize) -> Self {
        Self::Usage {
            command,
            expected,
            actual,
        }
    }

    pub fn invalid_size(value: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidSize {
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_message_matches_cli_wording() {
        let err = VolumeCommandError::usage("show", 1, 0);
        assert_eq!(err.to_string(), "The number of args is not correct!");
    }

    #[test]
    fn test_remote_error_is_transparent() {
        let err: VolumeCommandError =
            OsdsError::http("http://localhost/v1beta/t/block/volumes/x", 404, "volume not found")
                .into();
        assert_eq!(
            err.to_string(),
            "HTTP 404 at http://localhost/v1beta/t/block/volumes/x: volume not found"
        );
    }

    #[test]
    fn test_invalid_size_message() {
        let reason = "abc".parse::<i64>().unwrap_err();
        let err = VolumeCommandError::invalid_size("abc", reason);
        assert!(err.to_string().starts_with("error parsing size abc:"));
    }

    #[test]
    fn test_config_error_keeps_context_chain() {
        let err = VolumeCommandError::Config(
            anyhow::anyhow!("No such file or directory").context("Failed to read config file"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to read config file: No such file or directory"
        );
    }
}
