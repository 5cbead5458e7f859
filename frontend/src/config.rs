use crate::{logging::DEFAULT_LEVEL, theme::ThemePreference};
use log::Level;
use serde::Deserialize;
use std::{str::FromStr, sync::OnceLock};
use thiserror::Error;

/// Name of the optional global the hosting page sets before the bundle loads:
/// `window.__ALCHEMIST_CONFIG = { log_level: "debug", theme: "dark" }`.
pub const WINDOW_CONFIG_KEY: &str = "__ALCHEMIST_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed runtime config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
    #[error("runtime config global is not JSON-serializable")]
    NotSerializable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub log_level: Option<String>,
    pub theme: ThemePreference,
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: RuntimeConfig = serde_json::from_str(raw)?;
        cfg.log_level()?;
        Ok(cfg)
    }

    pub fn log_level(&self) -> Result<Level, ConfigError> {
        match self.log_level.as_deref() {
            None => Ok(DEFAULT_LEVEL),
            Some(raw) => {
                Level::from_str(raw.trim()).map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))
            }
        }
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_window_config() -> Result<Option<String>, ConfigError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let any = match js_sys::Reflect::get(&window, &WINDOW_CONFIG_KEY.into()) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return Ok(None),
    };
    let json = js_sys::JSON::stringify(&any).map_err(|_| ConfigError::NotSerializable)?;
    Ok(json.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_window_config() -> Result<Option<String>, ConfigError> {
    Ok(None)
}

fn load() -> Result<RuntimeConfig, ConfigError> {
    match read_window_config()? {
        Some(raw) => RuntimeConfig::from_json(&raw),
        None => Ok(RuntimeConfig::default()),
    }
}

/// Reads the window global once. A broken config falls back to defaults; the
/// error is handed back so it can be logged once a logger exists.
pub fn init() -> (&'static RuntimeConfig, Option<ConfigError>) {
    if let Some(cfg) = RUNTIME_CONFIG.get() {
        return (cfg, None);
    }
    let (cfg, err) = match load() {
        Ok(cfg) => (cfg, None),
        Err(err) => (RuntimeConfig::default(), Some(err)),
    };
    (RUNTIME_CONFIG.get_or_init(|| cfg), err)
}
