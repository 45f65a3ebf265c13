use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{OverlayError, OverlayResult};

/// Overlay settings, usually read from `overlay.toml` next to the host config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Host key name of the reserved capture hotkey.
    #[serde(default = "default_toggle_key")]
    pub toggle_key: String,

    /// Host wheel units per physical notch.
    #[serde(default = "default_wheel_unit")]
    pub wheel_unit: i32,

    #[serde(default)]
    pub show_demo_window: bool,

    #[serde(default)]
    pub show_perf_widget: bool,

    /// Prefix for every console flag/action the overlay registers.
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    #[serde(default = "default_font_texture_name")]
    pub font_texture_name: String,

    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_toggle_key() -> String {
    "F9".to_string()
}
fn default_wheel_unit() -> i32 {
    120
}
fn default_command_prefix() -> String {
    "overlay_".to_string()
}
fn default_font_texture_name() -> String {
    "OverlayFontAtlas".to_string()
}
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            toggle_key: default_toggle_key(),
            wheel_unit: default_wheel_unit(),
            show_demo_window: false,
            show_perf_widget: false,
            command_prefix: default_command_prefix(),
            font_texture_name: default_font_texture_name(),
            log_filter: default_log_filter(),
        }
    }
}

impl OverlayConfig {
    pub fn from_toml_str(s: &str) -> OverlayResult<Self> {
        let mut cfg: OverlayConfig =
            toml::from_str(s).map_err(|e| OverlayError::Config(e.to_string()))?;
        cfg.wheel_unit = cfg.wheel_unit.max(1);
        Ok(cfg)
    }

    /// Missing file means defaults; a file that exists but does not parse is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> OverlayResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => Self::from_toml_str(&s).map_err(|e| match e {
                OverlayError::Config(msg) => {
                    OverlayError::Config(format!("parse {}: {}", path.display(), msg))
                }
                other => other,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    #[inline]
    pub fn command_name(&self, name: &str) -> String {
        format!("{}{}", self.command_prefix, name)
    }
}
