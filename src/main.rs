//! HelpBridge Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        rolling_logger::dump_recent();
    }));

    let config = AppConfig::load();
    if rolling_logger::init(config.log_level, rolling_logger::DEFAULT_CAPACITY).is_ok() {
        config.log_summary();
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
