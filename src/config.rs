use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_TARGET_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub target_url: String,
    pub window: WindowConfig,
    pub capabilities: Capabilities,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            window: WindowConfig::default(),
            capabilities: Capabilities::default(),
            display: DisplayConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("webkiosk"),
            fullscreen: true,
        }
    }
}

/// Browser engine feature toggles applied to the embedded view.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub scripts: bool,
    pub webgl: bool,
    pub fullscreen: bool,
    pub audio: bool,
    pub local_storage: bool,
    pub database: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            scripts: true,
            webgl: true,
            fullscreen: true,
            audio: true,
            local_storage: true,
            database: true,
        }
    }
}

impl Capabilities {
    pub fn summary(&self) -> String {
        let onoff = |enabled: bool| if enabled { "on" } else { "off" };
        format!(
            "scripts={} webgl={} fullscreen={} audio={} local_storage={} database={}",
            onoff(self.scripts),
            onoff(self.webgl),
            onoff(self.fullscreen),
            onoff(self.audio),
            onoff(self.local_storage),
            onoff(self.database),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub backend: BackendKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Native,
    Null,
}

impl Config {
    /// Load configuration from the first readable file in the search path.
    /// Missing files fall through to the built-in defaults; a file that
    /// fails to parse is skipped with a warning.
    pub fn load() -> Self {
        for path in Self::search_paths() {
            let Ok(contents) = fs::read_to_string(&path) else {
                continue;
            };
            match toml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded configuration");
                    return config;
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "skipping malformed configuration");
                }
            }
        }
        Self::default()
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("webkiosk.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("webkiosk/config.toml"));
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_capability() {
        let caps = Capabilities::default();
        assert!(caps.scripts);
        assert!(caps.webgl);
        assert!(caps.fullscreen);
        assert!(caps.audio);
        assert!(caps.local_storage);
        assert!(caps.database);
    }

    #[test]
    fn defaults_point_at_local_origin() {
        let config = Config::default();
        assert_eq!(config.target_url, "http://localhost:8000");
        assert!(config.window.fullscreen);
        assert_eq!(config.display.backend, BackendKind::Native);
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.target_url, DEFAULT_TARGET_URL);
        assert!(config.capabilities.database);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            target_url = "http://localhost:3000"

            [capabilities]
            scripts = false
            "#,
        )
        .unwrap();
        assert_eq!(config.target_url, "http://localhost:3000");
        assert!(!config.capabilities.scripts);
        assert!(config.capabilities.webgl);
        assert!(config.window.fullscreen);
    }

    #[test]
    fn capability_toggles_are_observable() {
        let config: Config = toml::from_str(
            r#"
            [capabilities]
            audio = false
            database = false
            "#,
        )
        .unwrap();
        assert!(!config.capabilities.audio);
        assert!(!config.capabilities.database);
        assert!(config.capabilities.local_storage);
    }

    #[test]
    fn backend_kind_parses_lowercase_names() {
        let config: Config = toml::from_str("[display]\nbackend = \"null\"").unwrap();
        assert_eq!(config.display.backend, BackendKind::Null);

        let config: Config = toml::from_str("[display]\nbackend = \"native\"").unwrap();
        assert_eq!(config.display.backend, BackendKind::Native);
    }

    #[test]
    fn windowed_mode_can_be_selected() {
        let config: Config = toml::from_str("[window]\nfullscreen = false").unwrap();
        assert!(!config.window.fullscreen);
    }

    #[test]
    fn summary_reflects_toggled_flags() {
        let mut caps = Capabilities::default();
        assert_eq!(
            caps.summary(),
            "scripts=on webgl=on fullscreen=on audio=on local_storage=on database=on"
        );

        caps.scripts = false;
        caps.database = false;
        assert!(caps.summary().starts_with("scripts=off"));
        assert!(caps.summary().ends_with("database=off"));
    }
}
