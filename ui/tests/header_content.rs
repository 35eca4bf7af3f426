//! End-to-end checks of the header data path through the public API:
//! content source -> loader -> link views.

use async_trait::async_trait;
use futures::executor::block_on;

use ui::cms::{
    load_header_menu, load_settings, Cms, CmsError, ContentSource, GlobalSettings, MenuItem, Menus,
};
use ui::core::nav::{header_is_solid, is_scrolled, link_views};

struct JsonSource(&'static str);

#[async_trait(?Send)]
impl ContentSource for JsonSource {
    async fn menus(&self) -> Result<Menus, CmsError> {
        serde_json::from_str(self.0).map_err(|source| CmsError::Decode {
            document: "menus",
            source,
        })
    }

    async fn settings(&self) -> Result<GlobalSettings, CmsError> {
        Err(CmsError::Status {
            url: "https://cms.example/settings".into(),
            status: 404,
        })
    }
}

#[test]
fn single_home_entry_renders_one_home_link() {
    let cms = Cms::new(JsonSource(r#"{"header":[{"id":1,"label":"Home","url":"/"}]}"#));

    let items = block_on(load_header_menu(&cms));
    let links = link_views(&items, "/about");

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].label, "Home");
    assert_eq!(links[0].url, "/");
    assert!(!links[0].active);
}

#[test]
fn missing_settings_leave_contact_details_empty() {
    let cms = Cms::new(JsonSource(r#"{"header":[]}"#));
    assert_eq!(block_on(load_settings(&cms)), None);
}

#[test]
fn undecodable_menus_render_no_links() {
    let cms = Cms::new(JsonSource(r#"{"header": "oops"}"#));
    assert!(block_on(load_header_menu(&cms)).is_empty());
}

#[test]
fn bundled_site_highlights_current_page_only() {
    let cms = Cms::bundled();
    let items: Vec<MenuItem> = block_on(load_header_menu(&cms));
    assert!(items.len() > 1);

    let links = link_views(&items, "/products");
    let active: Vec<&str> = links
        .iter()
        .filter(|l| l.active)
        .map(|l| l.url.as_str())
        .collect();
    assert_eq!(active, ["/products"]);

    let settings = block_on(load_settings(&cms)).expect("bundled settings");
    assert!(settings.phone_href().starts_with("tel:+"));
}

#[test]
fn landing_page_header_depends_on_scroll_only() {
    assert!(!header_is_solid(is_scrolled(12.0), "/"));
    assert!(header_is_solid(is_scrolled(21.0), "/"));
    assert!(header_is_solid(is_scrolled(0.0), "/contact"));
}
