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

use anyhow::Result;
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use kvbridge::cli::{Cli, Command};
use kvbridge::config;
use kvbridge::error::BridgeError;
use kvbridge::rest::{RestClient, RestRequest};
use kvbridge::stream::{pair_fields, StreamClient};
use kvbridge::{bootstrap, output};

const EXIT_FAILURE: i32 = 1;
const EXIT_USAGE: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<BridgeError>() {
            Some(BridgeError::Usage(_)) => {
                eprintln!("{err}");
                process::exit(EXIT_USAGE);
            }
            Some(BridgeError::Connection { .. }) => {
                eprintln!("{err}");
                process::exit(EXIT_FAILURE);
            }
            // Backend faults surface with their transport detail intact.
            None => {
                eprintln!("Error: {err:#}");
                process::exit(EXIT_FAILURE);
            }
        }
    }
}

/// Logs go to stderr; stdout carries only command results.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        // init bootstraps credentials and never loads settings
        Command::Init { force } => {
            println!("{}", bootstrap::init_env(force)?);
            Ok(())
        }

        Command::Set { key, value } => rest_call(RestRequest::set(&key, &value)).await,
        Command::Get { key } => rest_call(RestRequest::get(&key)).await,
        Command::Del { key } => rest_call(RestRequest::del(&key)).await,
        Command::Scan { pattern, count } => rest_call(RestRequest::scan(&pattern, count)).await,
        Command::Lpush { list_name, element } => {
            rest_call(RestRequest::lpush(&list_name, &element)).await
        }
        Command::Lrange {
            list_name,
            start,
            stop,
        } => rest_call(RestRequest::lrange(&list_name, start, stop)).await,

        Command::StreamAdd {
            stream_key,
            field_values,
        } => {
            // arity check comes first: a usage error must never reach the
            // network layer
            let pairs = pair_fields(&field_values)?;
            let client = stream_client()?;
            let id = client.append(&stream_key, &pairs).await?;
            println!("{id}");
            Ok(())
        }

        Command::StreamRead { stream_key, count } => {
            let client = stream_client()?;
            let entries = client.range(&stream_key, count).await?;
            if entries.is_empty() {
                println!("{}", output::EMPTY_STREAM_MESSAGE);
            } else {
                for line in output::render_entries(&entries) {
                    println!("{line}");
                }
            }
            Ok(())
        }
    }
}

/// Execute one REST command and print the body verbatim. Settings are read
/// at the point of use, once per invocation.
async fn rest_call(request: RestRequest) -> Result<()> {
    let settings = config::load_settings()?;
    let client = RestClient::new(&settings)?;
    let body = client.execute(request).await?;
    println!("{body}");
    Ok(())
}

fn stream_client() -> Result<StreamClient> {
    let settings = config::load_settings()?;
    Ok(StreamClient::new(&settings.redis_url)?)
}
