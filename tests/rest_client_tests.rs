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

use kvbridge::config::Settings;
use kvbridge::rest::{RestClient, RestRequest};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned HTTP response on an ephemeral port; returns the base URL.
async fn serve_once(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{addr}")
}

fn settings(base_url: String) -> Settings {
    Settings {
        kv_rest_api_url: base_url,
        kv_rest_api_token: "test-token".to_string(),
        kv_rest_api_read_only_token: None,
        redis_url: "redis://localhost:6379".to_string(),
    }
}

#[tokio::test]
async fn test_non_success_status_aborts_with_status_and_body() {
    let base_url = serve_once(
        "HTTP/1.1 500 Internal Server Error\r\n\
         content-length: 9\r\n\
         connection: close\r\n\
         \r\n\
         boom body",
    )
    .await;

    let client = RestClient::new(&settings(base_url)).unwrap();
    let err = client
        .execute(RestRequest::get("mykey"))
        .await
        .expect_err("a 500 must abort the command");

    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("boom body"));
}

#[tokio::test]
async fn test_success_body_passes_through_verbatim() {
    // not JSON on purpose: the body must never be parsed or reformatted
    let base_url = serve_once(
        "HTTP/1.1 200 OK\r\n\
         content-length: 13\r\n\
         connection: close\r\n\
         \r\n\
         plain text OK",
    )
    .await;

    let client = RestClient::new(&settings(base_url)).unwrap();
    let body = client.execute(RestRequest::get("mykey")).await.unwrap();
    assert_eq!(body, "plain text OK");
}
