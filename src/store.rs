//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use chrono::Utc;
use helpbridge_core::catalog;
use helpbridge_core::notifications::{self, Notification};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::AuthSession;
use crate::session::Session;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in session, if any
    pub session: Option<AuthSession>,
    /// Notification feed
    pub notifications: Vec<Notification>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: None,
            notifications: catalog::sample_notifications(Utc::now()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Persist and publish a fresh session
pub fn store_sign_in(store: &AppStore, session: AuthSession) {
    if let Err(e) = Session::browser().save(&session) {
        log::warn!("[Store] session not persisted: {}", e);
    }
    *store.session().write() = Some(session);
}

pub fn store_sign_out(store: &AppStore) {
    if let Err(e) = Session::browser().clear() {
        log::warn!("[Store] session not cleared: {}", e);
    }
    *store.session().write() = None;
    log::info!("[Store] signed out");
}

pub fn store_mark_read(store: &AppStore, id: u32) {
    let changed = notifications::mark_read(&mut store.notifications().write(), id);
    if !changed {
        log::debug!("[Store] notification {} already read", id);
    }
}

pub fn store_mark_all_read(store: &AppStore) {
    let changed = notifications::mark_all_read(&mut store.notifications().write());
    log::debug!("[Store] marked {} notifications read", changed);
}

pub fn store_unread_count(store: &AppStore) -> usize {
    notifications::unread_count(&store.notifications().read())
}
