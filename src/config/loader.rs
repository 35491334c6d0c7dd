// Settings loader with .env file fallback

use super::types::Settings;
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashMap;

const ENV_FILE: &str = ".env";

pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from the process environment, falling back to a `.env`
    /// file in the working directory for variables that are not set.
    pub fn load() -> Result<Settings> {
        let file_vars = match std::fs::read_to_string(ENV_FILE) {
            Ok(content) => Self::parse_env_file(&content),
            Err(_) => HashMap::new(),
        };

        Self::from_sources(|name| std::env::var(name).ok(), &file_vars)
    }

    /// Resolve the four settings, environment first, `.env` values second.
    fn from_sources<E>(env: E, file_vars: &HashMap<String, String>) -> Result<Settings>
    where
        E: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| env(name).or_else(|| file_vars.get(name).cloned());
        let required = |name: &str| {
            lookup(name).with_context(|| {
                format!("Missing required setting {name} (set it in the environment or {ENV_FILE})")
            })
        };

        Ok(Settings {
            kv_rest_api_url: required("KV_REST_API_URL")?,
            kv_rest_api_token: required("KV_REST_API_TOKEN")?,
            kv_rest_api_read_only_token: lookup("KV_REST_API_READ_ONLY_TOKEN"),
            redis_url: required("REDIS_URL")?,
        })
    }

    /// Parse `KEY=VALUE` lines. Blank lines and `#` comments are skipped,
    /// an `export ` prefix is tolerated, and matching single or double
    /// quotes around the value are stripped.
    fn parse_env_file(content: &str) -> HashMap<String, String> {
        let re = Regex::new(r"^\s*(?:export\s+)?([A-Za-z_][A-Za-z0-9_]*)\s*=(.*)$").unwrap();

        let mut vars = HashMap::new();
        for line in content.lines() {
            if line.trim_start().starts_with('#') {
                continue;
            }
            if let Some(caps) = re.captures(line) {
                let value = caps[2].trim();
                let value = value
                    .strip_prefix('"')
                    .and_then(|v| v.strip_suffix('"'))
                    .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                    .unwrap_or(value);
                vars.insert(caps[1].to_string(), value.to_string());
            }
        }
        vars
    }
}
