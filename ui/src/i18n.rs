//! Localized strings for the site chrome.
//!
//! Built on:
//! - `i18n-embed` (language negotiation + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/stylesurface-ui.ftl   (fallback/reference)
//!   es-ES/stylesurface-ui.ftl
//! ```
//!
//! Call [`init`] once at app start (it is idempotent), then look strings up
//! with `t!("nav-get-quote")` or `t!("nav-call-us", phone = number)`.
//!
//! The requested locale comes from the OS on desktop and from
//! `navigator.languages` on the web.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Shorthand for `fl!(&*LOADER, ...)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "stylesurface-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback");
        }
        // Phone numbers and site names are interpolated into aria labels; bidi
        // isolation marks would end up in the accessible name. Applies to the
        // bundles loaded above, so it must run after `select`.
        LOADER.set_use_isolating(false);
    });
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundles_are_named_after_the_domain() {
        for lang in ["en-US", "es-ES"] {
            let path = format!("{lang}/{DOMAIN}.ftl");
            assert!(Localizations::get(&path).is_some(), "missing {path}");
        }

        let config = include_str!("../i18n.toml");
        assert!(config.contains(&format!("domain = \"{DOMAIN}\"")));
    }

    #[test]
    fn fallback_bundle_resolves_keys() {
        let en: LanguageIdentifier = "en-US".parse().unwrap();
        i18n_embed::select(&*LOADER, &Localizations, &[en]).unwrap();
        let s = fl!(&*LOADER, "nav-get-quote");
        assert_eq!(s, "Get Bulk Quote");
    }
}
