//! Shared UI crate for Portal Chat. Every view, component and piece of session
//! state lives here; the platform crates only own routing and launch.

use dioxus::prelude::*;

pub mod chat;
pub mod core;
pub mod i18n;
pub mod login;
pub mod profile;
pub mod views;

pub mod components {
    // Localized application navbar and router-agnostic links (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
    pub use app_navbar::NavLink;
}

/// Shared theme stylesheet. Web links it; desktop inlines the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests;
