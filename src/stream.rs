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

// Stream store client (Redis wire protocol)

use crate::error::BridgeError;
use anyhow::{bail, Result};
use redis::aio::MultiplexedConnection;
use tracing::debug;

/// One stream entry as received from the backend.
///
/// Identifier and fields stay raw bytes here; decoding for display happens
/// at the normalizer boundary, not in this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEntry {
    pub id: Vec<u8>,
    pub fields: Vec<(Vec<u8>, Vec<u8>)>,
}

/// Pair alternating field/value tokens in argument order.
///
/// An odd token count is a usage error, raised before any connection is
/// attempted.
pub fn pair_fields(tokens: &[String]) -> Result<Vec<(&str, &str)>, BridgeError> {
    if tokens.len() % 2 != 0 {
        return Err(BridgeError::Usage(
            "stream-add requires an even number of field/value arguments".to_string(),
        ));
    }
    Ok(tokens
        .chunks_exact(2)
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .collect())
}

/// Client for the stream store.
///
/// Connection-level failures are classified as [`BridgeError::Connection`]
/// with the configured address; server-side errors propagate raw.
#[derive(Debug)]
pub struct StreamClient {
    client: redis::Client,
    address: String,
}

impl StreamClient {
    pub fn new(address: &str) -> Result<Self, BridgeError> {
        let client = redis::Client::open(address).map_err(|source| BridgeError::Connection {
            address: address.to_string(),
            source,
        })?;
        Ok(Self {
            client,
            address: address.to_string(),
        })
    }

    async fn connect(&self) -> Result<MultiplexedConnection, BridgeError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|source| BridgeError::Connection {
                address: self.address.clone(),
                source,
            })
    }

    /// Append one entry; returns the backend-assigned identifier as opaque
    /// text.
    pub async fn append(&self, stream_key: &str, pairs: &[(&str, &str)]) -> Result<String> {
        debug!(stream_key, fields = pairs.len(), "appending stream entry");
        let mut conn = self.connect().await?;

        let mut cmd = redis::cmd("XADD");
        cmd.arg(stream_key).arg("*");
        for (field, value) in pairs {
            cmd.arg(field).arg(value);
        }

        let id: String = cmd
            .query_async(&mut conn)
            .await
            .map_err(|e| self.classify(e))?;
        Ok(id)
    }

    /// Read up to `count` entries from the start of the stream, in backend
    /// order. An empty result is a normal outcome, not an error.
    pub async fn range(&self, stream_key: &str, count: u64) -> Result<Vec<StreamEntry>> {
        debug!(stream_key, count, "reading stream range");
        let mut conn = self.connect().await?;

        let reply: redis::Value = redis::cmd("XRANGE")
            .arg(stream_key)
            .arg("-")
            .arg("+")
            .arg("COUNT")
            .arg(count)
            .query_async(&mut conn)
            .await
            .map_err(|e| self.classify(e))?;

        parse_entries(reply)
    }

    /// IO-level faults become connection errors; anything the server said
    /// (wrong type, bad command) propagates as a backend error.
    fn classify(&self, error: redis::RedisError) -> anyhow::Error {
        if error.is_connection_refusal()
            || error.is_io_error()
            || error.is_timeout()
            || error.is_connection_dropped()
        {
            BridgeError::Connection {
                address: self.address.clone(),
                source: error,
            }
            .into()
        } else {
            error.into()
        }
    }
}

/// Decode an XRANGE reply into entries, keeping identifiers and fields as
/// raw bytes and preserving backend order.
fn parse_entries(reply: redis::Value) -> Result<Vec<StreamEntry>> {
    use redis::Value;

    let Value::Array(items) = reply else {
        bail!("unexpected stream range reply: {reply:?}");
    };

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        let Value::Array(parts) = item else {
            bail!("unexpected stream entry shape: {item:?}");
        };
        let mut parts = parts.into_iter();

        let id = match parts.next() {
            Some(Value::BulkString(id)) => id,
            other => bail!("unexpected stream entry id: {other:?}"),
        };

        let mut fields = Vec::new();
        if let Some(Value::Array(raw)) = parts.next() {
            let mut raw = raw.into_iter();
            while let Some(field) = raw.next() {
                let value = raw.next();
                match (field, value) {
                    (Value::BulkString(f), Some(Value::BulkString(v))) => fields.push((f, v)),
                    other => bail!("unexpected stream field pair: {other:?}"),
                }
            }
        }

        entries.push(StreamEntry { id, fields });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use redis::Value;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_pair_fields_even() {
        let tokens = tokens(&["a", "1", "b", "2"]);
        let pairs = pair_fields(&tokens).unwrap();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_pair_fields_empty() {
        let pairs = pair_fields(&[]).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_pair_fields_odd_is_usage_error() {
        let tokens = tokens(&["a", "1", "b"]);
        let err = pair_fields(&tokens).unwrap_err();
        assert!(matches!(err, BridgeError::Usage(_)));
        assert!(err.to_string().contains("even number"));
    }

    fn bulk(s: &[u8]) -> Value {
        Value::BulkString(s.to_vec())
    }

    #[test]
    fn test_parse_entries_preserves_order() {
        let reply = Value::Array(vec![
            Value::Array(vec![
                bulk(b"1-0"),
                Value::Array(vec![bulk(b"b"), bulk(b"2"), bulk(b"a"), bulk(b"1")]),
            ]),
            Value::Array(vec![
                bulk(b"2-0"),
                Value::Array(vec![bulk(b"c"), bulk(b"3")]),
            ]),
        ]);

        let entries = parse_entries(reply).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, b"1-0");
        assert_eq!(
            entries[0].fields,
            vec![(b"b".to_vec(), b"2".to_vec()), (b"a".to_vec(), b"1".to_vec())]
        );
        assert_eq!(entries[1].id, b"2-0");
    }

    #[test]
    fn test_parse_entries_empty() {
        let entries = parse_entries(Value::Array(vec![])).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_entries_rejects_malformed_reply() {
        assert!(parse_entries(Value::Int(3)).is_err());
        assert!(parse_entries(Value::Array(vec![Value::Int(1)])).is_err());
    }
}
