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

// Response normalization
//
// REST bodies pass through verbatim and are never parsed here. Stream
// payloads arrive as raw bytes and are decoded for display at this
// boundary only.

use crate::stream::StreamEntry;
use serde_json::Value;

/// Printed for a successful stream read that returned nothing.
pub const EMPTY_STREAM_MESSAGE: &str = "No entries found in stream";

/// Render one entry: identifier, colon, compact JSON object of the decoded
/// fields in backend order.
pub fn render_entry(entry: &StreamEntry) -> String {
    let mut fields = serde_json::Map::new();
    for (field, value) in &entry.fields {
        fields.insert(decode(field), Value::String(decode(value)));
    }
    format!("{}: {}", decode(&entry.id), Value::Object(fields))
}

/// Render a range read, one line per entry, order as received.
pub fn render_entries(entries: &[StreamEntry]) -> Vec<String> {
    entries.iter().map(render_entry).collect()
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
