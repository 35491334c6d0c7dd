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

// Key-value REST API client

use crate::config::Settings;
use anyhow::{bail, Context, Result};
use reqwest::{header, Client, Method};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully-described REST call, kept separate from execution so request
/// construction is testable without a network.
///
/// The path is interpolated from a fixed template per command; the body is
/// present only for the write commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl RestRequest {
    pub fn set(key: &str, value: &str) -> Self {
        Self {
            method: Method::POST,
            path: format!("/set/{key}"),
            body: Some(json!({ "value": value })),
        }
    }

    pub fn get(key: &str) -> Self {
        Self {
            method: Method::GET,
            path: format!("/get/{key}"),
            body: None,
        }
    }

    pub fn del(key: &str) -> Self {
        Self {
            method: Method::DELETE,
            path: format!("/del/{key}"),
            body: None,
        }
    }

    pub fn scan(pattern: &str, count: u64) -> Self {
        Self {
            method: Method::GET,
            path: format!("/scan/0/match/{pattern}/count/{count}"),
            body: None,
        }
    }

    pub fn lpush(list_name: &str, element: &str) -> Self {
        Self {
            method: Method::POST,
            path: format!("/lpush/{list_name}"),
            body: Some(json!({ "element": element })),
        }
    }

    pub fn lrange(list_name: &str, start: i64, stop: i64) -> Self {
        Self {
            method: Method::GET,
            path: format!("/lrange/{list_name}/{start}/{stop}"),
            body: None,
        }
    }
}

/// HTTP client for the key-value REST API.
///
/// The bearer token rides on every request via the default header map;
/// `Content-Type: application/json` is added only when a body is present.
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        let auth_value = format!("Bearer {}", settings.kv_rest_api_token);
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_value).context("Invalid API token")?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.kv_rest_api_url.clone(),
        })
    }

    /// Send one request and return the response body verbatim.
    ///
    /// The body is never parsed or reformatted here; a non-success status
    /// aborts the invocation with the status and response text.
    pub async fn execute(&self, request: RestRequest) -> Result<String> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, %url, "sending REST request");

        let mut builder = self.client.request(request.method, &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            bail!("REST backend returned {}: {}", status, error_text);
        }

        response.text().await.context("Failed to read response body")
    }
}
