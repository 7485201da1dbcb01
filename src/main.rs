//! Todo Search Frontend Entry Point

mod app;
mod components;
mod context;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use todo_state::AppConfig;

/// Bundled configuration (seed list, add rules, log level)
const CONFIG_JSON: &str = include_str!("../config/app.json");

fn load_config() -> AppConfig {
    match AppConfig::from_json(CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[APP] Falling back to default config: {}", e);
            AppConfig::default()
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);

    let config = load_config();
    log::set_max_level(config.level_filter());
    log::info!("[APP] Starting with {} seed todos", config.seed.len());

    mount_to_body(move || view! { <App config=config /> });
}
