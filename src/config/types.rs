// Copyright 2026 kvbridge contributors
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

// Settings consumed by the backend clients

/// Backend endpoints and credentials for one invocation.
///
/// All values are opaque strings; they are used as-is in request
/// construction and never validated beyond presence. Loaded once per
/// command and passed by reference into the builders.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the key-value REST API.
    pub kv_rest_api_url: String,
    /// Bearer token attached to every REST request.
    pub kv_rest_api_token: String,
    /// Optional read-only token. Carried for operators that provision one;
    /// no command currently selects it over the read-write token.
    pub kv_rest_api_read_only_token: Option<String>,
    /// Connection URL of the stream store.
    pub redis_url: String,
}
