//! UI Components
//!
//! Pages and reusable Leptos components.

mod active_filters;
mod filter_sidebar;
mod login_form;
mod nav_bar;
mod need_browser;
pub(crate) mod need_card;
mod need_detail;
mod notification_center;
mod profile_page;
mod registration_wizard;

pub use active_filters::ActiveFilters;
pub use filter_sidebar::FilterSidebar;
pub use login_form::LoginForm;
pub use nav_bar::NavBar;
pub use need_browser::NeedBrowser;
pub use need_card::NeedCard;
pub use need_detail::NeedDetailView;
pub use notification_center::NotificationCenter;
pub use profile_page::ProfilePage;
pub use registration_wizard::RegistrationWizard;
