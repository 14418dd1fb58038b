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

//! Request bodies for each volume operation
//!
//! Each builder only fills the fields its operation sends. Fields left empty are
//! omitted from the wire body, so the service sees them as "not provided".

use super::spec::VolumeSpec;
use crate::shared::error::VolumeCommandError;

/// Flags accepted by `volume create`
#[derive(Debug, Clone, Default)]
pub struct CreateVolumeOptions<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub availability_zone: Option<&'a str>,
    pub profile_id: Option<&'a str>,
}

/// Parse the size argument of `volume create`.
pub fn parse_size(arg: &str) -> Result<i64, VolumeCommandError> {
    let size = arg
        .parse::<i64>()
        .map_err(|e| VolumeCommandError::invalid_size(arg, e))?;

    if size < 0 {
        return Err(VolumeCommandError::invalid_size(
            arg,
            "size must not be negative",
        ));
    }

    Ok(size)
}

pub fn create_request(size: i64, options: &CreateVolumeOptions<'_>) -> VolumeSpec {
    VolumeSpec {
        name: owned(options.name),
        description: owned(options.description),
        availability_zone: owned(options.availability_zone),
        size,
        profile_id: owned(options.profile_id),
        ..Default::default()
    }
}

/// The profile travels with the delete so the service can check policy context.
pub fn delete_request(profile_id: Option<&str>) -> VolumeSpec {
    VolumeSpec {
        profile_id: owned(profile_id),
        ..Default::default()
    }
}

pub fn update_request(name: Option<&str>, description: Option<&str>) -> VolumeSpec {
    VolumeSpec {
        name: owned(name),
        description: owned(description),
        ..Default::default()
    }
}

fn owned(value: Option<&str>) -> String {
    value.map(str::to_string).unwrap_or_default()
}
