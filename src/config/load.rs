use std::{env, path::Path, path::PathBuf};

use super::schema::Settings;

const ENV_PREFIX: &str = "NOWPLAYING";
const APP_DIR: &str = "nowplaying";

/// Configuration loading helpers.
///
/// `Settings::load` layers environment variables (prefix `NOWPLAYING__`) over
/// an optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and the default config file, if any.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();
        Self::load_from(config_path.as_deref(), false)
    }

    /// Load settings using `path` as the config file.
    ///
    /// With `required` set, a missing file is an error instead of being skipped.
    pub fn load_from(path: Option<&Path>, required: bool) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(required),
            );
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.player.binary.trim().is_empty() {
            return Err("player.binary must not be empty".to_string());
        }
        if self.poll.interval_ms == 0 {
            return Err("poll.interval_ms must be >= 1".to_string());
        }
        if self.ui.progress_width == 0 {
            return Err("ui.progress_width must be >= 1".to_string());
        }
        if self.ui.panel_width < 10 {
            return Err("ui.panel_width must be >= 10".to_string());
        }

        let keys = self.controls.keys();
        for (i, k) in keys.iter().enumerate() {
            if k.is_control() || k.is_whitespace() {
                return Err(format!("controls: {k:?} cannot be used as a key"));
            }
            if keys[i + 1..].contains(k) {
                return Err(format!("controls: key '{k}' is bound more than once"));
            }
        }
        Ok(())
    }

    /// Render the settings as TOML, the same shape the config file uses.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Resolve the config path from `NOWPLAYING_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("NOWPLAYING_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/nowplaying/config.toml`
/// or `~/.config/nowplaying/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join(APP_DIR).join("config.toml"))
}

/// Default log file under `$XDG_STATE_HOME/nowplaying/` or `~/.local/state/nowplaying/`.
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join(APP_DIR).join("nowplaying.log"))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(dir) = env::var_os(var).filter(|v| !v.is_empty()) {
        Some(PathBuf::from(dir))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}
