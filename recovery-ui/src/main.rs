mod app;
mod bridge;
mod cards;
mod components;
mod pages;
mod state;

use app::App;
use leptos::*;
use recovery_core::AppConfig;

fn main() {
    let (config, problem) = match bridge::load_config() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    if let Some(level) = config.log_level() {
        if let Err(err) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
        }
    }
    if let Some(err) = problem {
        log::warn!("using default config: {err}");
    }
    log::info!(
        "starting dashboard ({:?} storage, prefix `{}`)",
        config.storage,
        config.storage_prefix
    );

    mount_to_body(move || view! { <App config=config/> });
}
