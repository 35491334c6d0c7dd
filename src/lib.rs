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

// kvbridge - dual-backend command-line client
//
// One logical store, two backends:
// - a key-value REST API (set/get/del/scan/lpush/lrange over HTTP with a
//   bearer token)
// - a stream store reached over the Redis wire protocol (stream-add,
//   stream-read)
//
// Each invocation runs exactly one command: the dispatcher picks the
// backend from the command name, the builder issues a single network call,
// and the normalizer turns the response into one textual result on stdout.

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod rest;
pub mod stream;

// Re-export main types
pub use cli::{Cli, Command};
pub use config::{load_settings, Settings, SettingsLoader};
pub use error::BridgeError;
pub use output::{render_entries, render_entry, EMPTY_STREAM_MESSAGE};
pub use rest::{RestClient, RestRequest};
pub use stream::{pair_fields, StreamClient, StreamEntry};
