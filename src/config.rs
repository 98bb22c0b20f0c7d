// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

fn default_accent_color() -> [f32; 4] {
    // Muted teal, RGBA.
    [0.19, 0.60, 0.66, 1.0]
}

/// User settings persisted as `config.toml` in the config directory.
///
/// The accent color is stored as four explicit RGBA components so the file
/// stays readable and portable across front ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_accent_color")]
    pub accent_color: [f32; 4],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

impl Config {
    /// Loads the config file. A missing or unreadable file yields defaults;
    /// this never fails.
    pub fn load(ctx: &dyn AppContext) -> Self {
        let Ok(path) = ctx.get_config_file_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("invalid config file, using defaults: {e}");
                Self::default()
            }),
            Err(e) => {
                log::warn!("could not read config file, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let raw = toml::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }
}
