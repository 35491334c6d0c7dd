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

use clap::{Parser, Subcommand};

/// kvbridge - uniform commands against a key-value REST API and a stream store
///
/// Credentials come from KV_REST_API_URL, KV_REST_API_TOKEN and REDIS_URL,
/// read from the environment or a local .env file. Run `kvbridge init` to
/// bootstrap the .env file from .env.example.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Which backend a command targets is fixed by the command itself: the
/// stream commands go to the stream store, everything else to the REST API.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set a key to a value
    Set { key: String, value: String },

    /// Get the value of a key
    Get { key: String },

    /// Delete a key
    Del { key: String },

    /// Scan keys matching a pattern
    Scan {
        pattern: String,
        /// Maximum number of keys to return
        #[arg(long, default_value_t = 100)]
        count: u64,
    },

    /// Push an element onto a list
    Lpush { list_name: String, element: String },

    /// Get a range of elements from a list
    Lrange {
        list_name: String,
        #[arg(default_value_t = 0)]
        start: i64,
        #[arg(default_value_t = 10)]
        stop: i64,
    },

    /// Append an entry to a stream
    StreamAdd {
        stream_key: String,
        /// Alternating field/value tokens (even count required)
        #[arg(num_args = 0..)]
        field_values: Vec<String>,
    },

    /// Read entries from a stream
    StreamRead {
        stream_key: String,
        /// Maximum number of entries to read
        #[arg(default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
        count: u64,
    },

    /// Create a .env file from the .env.example template
    Init {
        /// Overwrite an existing .env
        #[arg(short, long)]
        force: bool,
    },
}
