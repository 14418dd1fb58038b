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

/// OpenSDS API defaults
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:50040";
pub const DEFAULT_API_VERSION: &str = "v1beta";
pub const DEFAULT_TENANT_ID: &str = "adminTenantId";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// REST resource path under the tenant scope
pub const VOLUMES_PATH: &str = "block/volumes";

/// Environment variables
pub const ENV_CONF_FILE: &str = "OSDSCTL_CONF_FILE";
pub const ENV_ENDPOINT: &str = "OPENSDS_ENDPOINT";
pub const ENV_TENANT_ID: &str = "OPENSDS_TENANT_ID";

/// HTTP client identification
pub const USER_AGENT: &str = concat!("osdsctl/", env!("CARGO_PKG_VERSION"));

/// Process exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
