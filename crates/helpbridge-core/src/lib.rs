//! HelpBridge Core
//!
//! Browser-independent logic of the HelpBridge client: the need listing
//! engine, notification filtering, registration validation and the
//! profile view-model.

pub mod account;
pub mod catalog;
pub mod needs;
pub mod notifications;
pub mod registration;

pub use account::{ProfileView, Role, User};
pub use needs::{visible_needs, FilterState, NeedRecord, SortOption};
