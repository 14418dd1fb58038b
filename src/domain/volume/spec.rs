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

//! Volume resource as exchanged with the OpenSDS API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A block volume record.
///
/// Used both as request body and as response payload. Zero-valued fields are
/// omitted from the JSON body and defaulted when absent from a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeSpec {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub updated_at: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub tenant_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Capacity in GB
    #[serde(skip_serializing_if = "is_zero")]
    pub size: i64,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub availability_zone: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub pool_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub snapshot_id: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}
