//! Content compiled into the binary. Used by the desktop build, offline previews and tests.

use async_trait::async_trait;
use serde::Deserialize;

use super::{CmsError, ContentSource, GlobalSettings, Menus};

const SITE_CONTENT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/content/site.json"));

#[derive(Debug, Deserialize)]
struct SiteDocument {
    #[serde(default)]
    menus: Menus,
    settings: GlobalSettings,
}

/// Serves menus and settings from a JSON document shaped like `content/site.json`.
#[derive(Debug, Clone)]
pub struct BundledContent {
    source: &'static str,
}

impl BundledContent {
    pub fn new() -> Self {
        Self::from_json(SITE_CONTENT)
    }

    /// Parsing is deferred to each read so a malformed document surfaces as a
    /// [`CmsError::Decode`] through the normal loading path.
    pub fn from_json(source: &'static str) -> Self {
        Self { source }
    }

    fn document(&self) -> Result<SiteDocument, CmsError> {
        serde_json::from_str(self.source).map_err(|source| CmsError::Decode {
            document: "site",
            source,
        })
    }
}

impl Default for BundledContent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ContentSource for BundledContent {
    async fn menus(&self) -> Result<Menus, CmsError> {
        self.document().map(|doc| doc.menus)
    }

    async fn settings(&self) -> Result<GlobalSettings, CmsError> {
        self.document().map(|doc| doc.settings)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn shipped_content_parses() {
        let content = BundledContent::new();
        let menus = block_on(content.menus()).expect("bundled menus");
        let settings = block_on(content.settings()).expect("bundled settings");

        assert_eq!(menus.header.first().map(|m| m.url.as_str()), Some("/"));
        assert!(!settings.phone.is_empty());
    }

    #[test]
    fn malformed_document_reports_decode_error() {
        let content = BundledContent::from_json("{ not json");
        let err = block_on(content.menus()).unwrap_err();
        assert!(matches!(err, CmsError::Decode { document: "site", .. }));
    }
}
