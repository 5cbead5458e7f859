pub mod components;
pub mod config;
pub mod logging;
pub mod pages;
pub mod router;
pub mod theme;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (cfg, config_err) = config::init();
    let level = cfg.log_level().unwrap_or(logging::DEFAULT_LEVEL);
    logging::init(level);
    if let Some(err) = config_err {
        log::warn!("{}; using defaults", err);
    }
    log::info!("Starting Project Alchemist landing page (log level {})", level);

    theme::init_theme(cfg.theme);
    router::mount_app();
}
