//! Content-management access for the site chrome.
//!
//! Components never talk to a backend directly. Hosts install a [`Cms`] handle
//! in context (`use_context_provider(|| Cms::new(...))`) and components read it
//! back with [`use_cms`]. When nothing was installed the bundled content is used,
//! so previews and tests render without any wiring.

mod bundled;
mod error;
mod http;
mod model;

pub use bundled::BundledContent;
pub use error::CmsError;
pub use http::HttpContent;
pub use model::{GlobalSettings, MenuItem, MenuItemId, Menus};

use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;
use tracing::warn;

/// A backend able to answer the two reads the site chrome needs.
#[async_trait(?Send)]
pub trait ContentSource {
    async fn menus(&self) -> Result<Menus, CmsError>;
    async fn settings(&self) -> Result<GlobalSettings, CmsError>;
}

/// Cheap, cloneable handle to the active [`ContentSource`].
#[derive(Clone)]
pub struct Cms(Rc<dyn ContentSource>);

impl Cms {
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn bundled() -> Self {
        Self::new(BundledContent::new())
    }

    pub async fn get_menus(&self) -> Result<Menus, CmsError> {
        self.0.menus().await
    }

    pub async fn get_settings(&self) -> Result<GlobalSettings, CmsError> {
        self.0.settings().await
    }
}

/// Header menu in CMS order, or an empty list when the read fails.
///
/// Failures are logged and otherwise swallowed: the header renders without
/// links rather than showing an error.
pub async fn load_header_menu(cms: &Cms) -> Vec<MenuItem> {
    match cms.get_menus().await {
        Ok(menus) => menus.header,
        Err(err) => {
            warn!(error = %err, "header menu unavailable; rendering without links");
            Vec::new()
        }
    }
}

/// Site settings, or `None` when the read fails.
pub async fn load_settings(cms: &Cms) -> Option<GlobalSettings> {
    match cms.get_settings().await {
        Ok(settings) => Some(settings),
        Err(err) => {
            warn!(error = %err, "site settings unavailable; contact details hidden");
            None
        }
    }
}

/// The host-provided [`Cms`], falling back to bundled content.
pub fn use_cms() -> Cms {
    let provided = try_use_context::<Cms>();
    use_hook(move || provided.unwrap_or_else(Cms::bundled))
}
