//! Shared UI crate for the Style Surface site. Components, views and content
//! access live here; the `web` and `desktop` crates only add routing and launch.

pub mod cms;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    mod button;
    mod icons;
    mod quote_modal;
    mod site_navbar;

    pub use button::{AccentButton, ButtonSize};
    pub use icons::{CloseIcon, MenuIcon, PhoneIcon};
    pub use quote_modal::{QuoteLauncher, QuoteModal, QuoteRequest};
    pub use site_navbar::SiteNavbar;
}
