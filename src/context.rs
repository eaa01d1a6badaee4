//! Application Context
//!
//! Shared navigation state and configuration provided via Leptos Context API.

use helpbridge_core::needs::NeedId;
use leptos::prelude::*;

use crate::config::AppConfig;

/// Top-level views
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Needs,
    NeedDetail(NeedId),
    Notifications,
    Profile,
    Login,
    Register,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>), config: AppConfig) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            config: StoredValue::new(config),
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("[Nav] {:?}", page);
        self.set_page.set(page);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
