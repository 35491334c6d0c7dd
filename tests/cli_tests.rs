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

use clap::Parser;
use kvbridge::cli::{Cli, Command};
use kvbridge::stream::pair_fields;

fn parse(args: &[&str]) -> Command {
    Cli::try_parse_from(args.iter().copied()).unwrap().command
}

#[test]
fn test_scan_default_count() {
    let Command::Scan { pattern, count } = parse(&["kvbridge", "scan", "sess:*"]) else {
        panic!("expected scan");
    };
    assert_eq!(pattern, "sess:*");
    assert_eq!(count, 100);
}

#[test]
fn test_scan_explicit_count() {
    let Command::Scan { count, .. } = parse(&["kvbridge", "scan", "p", "--count", "50"]) else {
        panic!("expected scan");
    };
    assert_eq!(count, 50);
}

#[test]
fn test_lrange_defaults() {
    let Command::Lrange { list_name, start, stop } = parse(&["kvbridge", "lrange", "queue"])
    else {
        panic!("expected lrange");
    };
    assert_eq!(list_name, "queue");
    assert_eq!(start, 0);
    assert_eq!(stop, 10);
}

#[test]
fn test_lrange_explicit_bounds() {
    let Command::Lrange { start, stop, .. } = parse(&["kvbridge", "lrange", "queue", "1", "3"])
    else {
        panic!("expected lrange");
    };
    assert_eq!(start, 1);
    assert_eq!(stop, 3);
}

#[test]
fn test_stream_read_default_count() {
    let Command::StreamRead { stream_key, count } = parse(&["kvbridge", "stream-read", "events"])
    else {
        panic!("expected stream-read");
    };
    assert_eq!(stream_key, "events");
    assert_eq!(count, 10);
}

#[test]
fn test_stream_read_rejects_zero_count() {
    let result = Cli::try_parse_from(["kvbridge", "stream-read", "events", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_stream_add_collects_trailing_tokens() {
    let Command::StreamAdd { stream_key, field_values } =
        parse(&["kvbridge", "stream-add", "events", "a", "1", "b", "2"])
    else {
        panic!("expected stream-add");
    };
    assert_eq!(stream_key, "events");
    assert_eq!(field_values, vec!["a", "1", "b", "2"]);

    let pairs = pair_fields(&field_values).unwrap();
    assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
}

#[test]
fn test_stream_add_odd_tokens_parse_but_fail_pairing() {
    // the parser accepts the token list; arity is the dispatcher's usage
    // check, raised before any connection attempt
    let Command::StreamAdd { field_values, .. } =
        parse(&["kvbridge", "stream-add", "events", "a"])
    else {
        panic!("expected stream-add");
    };
    assert!(pair_fields(&field_values).is_err());
}

#[test]
fn test_unknown_command_is_rejected() {
    assert!(Cli::try_parse_from(["kvbridge", "flush-all"]).is_err());
}

#[test]
fn test_set_requires_value() {
    assert!(Cli::try_parse_from(["kvbridge", "set", "key-only"]).is_err());
}

#[test]
fn test_init_force_flag() {
    let Command::Init { force } = parse(&["kvbridge", "init", "--force"]) else {
        panic!("expected init");
    };
    assert!(force);
}
