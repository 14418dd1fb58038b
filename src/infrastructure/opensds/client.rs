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

use crate::domain::config::ClientConf;
use crate::domain::volume::VolumeSpec;
use crate::infrastructure::constants::USER_AGENT;
use crate::shared::error::{OsdsError, Result};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, ClientBuilder, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// Volume operations exposed by the OpenSDS API.
///
/// Every call is a single request; callers treat any error as terminal.
#[async_trait::async_trait]
pub trait VolumeClient: Send + Sync {
    async fn create_volume(&self, spec: &VolumeSpec) -> Result<VolumeSpec>;

    async fn get_volume(&self, id: &str) -> Result<VolumeSpec>;

    async fn list_volumes(&self) -> Result<Vec<VolumeSpec>>;

    async fn delete_volume(&self, id: &str, spec: &VolumeSpec) -> Result<()>;

    async fn update_volume(&self, id: &str, spec: &VolumeSpec) -> Result<VolumeSpec>;
}

/// Error body returned by the API on failures
#[derive(Debug, Deserialize)]
struct ErrorSpec {
    #[serde(default)]
    message: String,
}

pub struct HttpVolumeClient {
    client: Client,
    volumes_url: String,
}

impl HttpVolumeClient {
    pub fn new(conf: &ClientConf) -> Result<Self> {
        conf.validate()?;

        let client = ClientBuilder::new()
            .timeout(conf.timeout())
            .danger_accept_invalid_certs(conf.accept_invalid_certs)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            volumes_url: conf.volumes_url(),
        })
    }

    pub fn volumes_url(&self) -> &str {
        &self.volumes_url
    }

    fn volume_url(&self, id: &str) -> String {
        format!("{}/{}", self.volumes_url, id)
    }

    async fn request(&self, method: Method, url: &str, body: Option<&VolumeSpec>) -> Result<String> {
        debug!(%method, url, "sending volume request");

        let mut req = self
            .client
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|source| OsdsError::Network {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|source| OsdsError::Network {
            url: url.to_string(),
            source,
        })?;
        debug!(status = status.as_u16(), bytes = text.len(), "received volume response");

        if !status.is_success() {
            return Err(OsdsError::http(url, status.as_u16(), error_message(&text)));
        }

        Ok(text)
    }
}

#[async_trait::async_trait]
impl VolumeClient for HttpVolumeClient {
    async fn create_volume(&self, spec: &VolumeSpec) -> Result<VolumeSpec> {
        let url = self.volumes_url.clone();
        let text = self.request(Method::POST, &url, Some(spec)).await?;
        decode(&url, &text)
    }

    async fn get_volume(&self, id: &str) -> Result<VolumeSpec> {
        let url = self.volume_url(id);
        let text = self.request(Method::GET, &url, None).await?;
        decode(&url, &text)
    }

    async fn list_volumes(&self) -> Result<Vec<VolumeSpec>> {
        let url = self.volumes_url.clone();
        let text = self.request(Method::GET, &url, None).await?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        // An empty collection may be encoded as `null`
        let volumes: Option<Vec<VolumeSpec>> = decode(&url, &text)?;
        Ok(volumes.unwrap_or_default())
    }

    async fn delete_volume(&self, id: &str, spec: &VolumeSpec) -> Result<()> {
        let url = self.volume_url(id);
        self.request(Method::DELETE, &url, Some(spec)).await?;
        Ok(())
    }

    async fn update_volume(&self, id: &str, spec: &VolumeSpec) -> Result<VolumeSpec> {
        let url = self.volume_url(id);
        let text = self.request(Method::PUT, &url, Some(spec)).await?;
        decode(&url, &text)
    }
}

fn decode<T: DeserializeOwned>(url: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|source| OsdsError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Prefer the `message` of a JSON error body, fall back to the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorSpec>(body) {
        Ok(spec) if !spec.message.is_empty() => spec.message,
        _ => body.trim().to_string(),
    }
}
