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

// Error taxonomy for the dispatcher

use thiserror::Error;

/// Failures the dispatcher formats itself. Anything else (a non-success
/// REST status, an unexpected stream-store reply) stays an `anyhow::Error`
/// and propagates with its transport detail intact.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Malformed command arguments, detected before any network call.
    #[error("{0}")]
    Usage(String),

    /// The stream store could not be reached or the connection broke.
    #[error("Error connecting to stream store at '{address}': {source}")]
    Connection {
        address: String,
        #[source]
        source: redis::RedisError,
    },
}
