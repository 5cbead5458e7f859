use log::Level;

pub const DEFAULT_LEVEL: Level = Level::Info;

/// Installs the browser console logger. Host builds have no console, so
/// this is a no-op there and `log` macros stay silent.
#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) {
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init(_level: Level) {}
