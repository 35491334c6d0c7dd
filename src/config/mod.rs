// Configuration module for kvbridge
//
// Provides:
// - environment variable loading
// - .env file fallback
// - required-setting validation

pub mod types;
mod loader;

pub use loader::SettingsLoader;
pub use types::Settings;

use anyhow::{Context, Result};

/// Load the settings for one invocation.
pub fn load_settings() -> Result<Settings> {
    SettingsLoader::load().context("Failed to load settings")
}
