//! Exam Admin Console Entry Point

mod app;
mod browser;
mod components;
mod context;
mod list_handle;
mod screens;
mod store;

use admin_core::AppConfig;
use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::from_json(include_str!("../admin.config.json"));
    let level = loaded
        .as_ref()
        .map(AppConfig::log_level)
        .unwrap_or(log::LevelFilter::Info);
    if console_logger::init(level).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }
    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            log::error!("falling back to default configuration: {}", err);
            AppConfig::default()
        }
    }
    .with_api_base(option_env!("EXAM_ADMIN_API_BASE"));
    log::info!("exam admin console starting against {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
