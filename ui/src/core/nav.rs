//! Pure navigation rules for the site header: active-link matching, the
//! scrolled/solid header predicate and the mobile menu state machine.
//!
//! Nothing here touches the DOM, so every rule is covered by plain unit tests.

use crate::cms::MenuItem;

pub const ROOT_PATH: &str = "/";

/// Vertical offset (CSS px) past which the header switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Path portion of a route string, without query or fragment.
pub fn pathname(route: &str) -> &str {
    let end = route.find(['?', '#']).unwrap_or(route.len());
    match &route[..end] {
        "" => ROOT_PATH,
        path => path,
    }
}

/// Whether a menu link pointing at `link_url` is the current page.
///
/// Matching is exact. The root link is only active on the root page itself,
/// never as a prefix of deeper paths.
pub fn is_active(link_url: &str, current_path: &str) -> bool {
    if link_url == ROOT_PATH && current_path != ROOT_PATH {
        return false;
    }
    current_path == link_url
}

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

/// Only the landing page has a transparent-at-top header; every other page
/// keeps the solid style regardless of scroll.
pub fn header_is_solid(scrolled: bool, current_path: &str) -> bool {
    scrolled || current_path != ROOT_PATH
}

/// Render-ready view of a single header link.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLinkView {
    pub key: String,
    pub label: String,
    pub url: String,
    pub new_tab: bool,
    pub active: bool,
}

pub fn link_views(items: &[MenuItem], current_path: &str) -> Vec<NavLinkView> {
    items
        .iter()
        .map(|item| NavLinkView {
            key: item.id.to_string(),
            label: item.label.clone(),
            url: item.url.clone(),
            new_tab: item.opens_new_tab(),
            active: is_active(&item.url, current_path),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Any navigation dismisses the panel.
    pub fn on_route_change(&mut self) {
        self.close();
    }

    /// The mobile quote button dismisses the panel, then opens the quote
    /// dialog, so the two never overlap.
    pub fn request_quote(&mut self, open_modal: impl FnOnce()) {
        self.close();
        open_modal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: &[&str] = &["/", "/about", "/products", "/products/oak", "/contact"];

    #[test]
    fn root_link_only_matches_root() {
        for path in PATHS {
            assert_eq!(is_active("/", path), *path == "/", "path {path}");
        }
    }

    #[test]
    fn non_root_links_match_exactly() {
        for link in PATHS.iter().filter(|p| **p != "/") {
            assert!(is_active(link, link));
            for other in PATHS.iter().filter(|p| *p != link) {
                assert!(!is_active(link, other), "{link} vs {other}");
            }
        }
        assert!(!is_active("/products", "/products/oak"));
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        assert!(!header_is_solid(is_scrolled(0.0), "/"));
        assert!(!header_is_solid(is_scrolled(20.0), "/"));
        assert!(header_is_solid(is_scrolled(20.5), "/"));
        assert!(header_is_solid(is_scrolled(400.0), "/"));
    }

    #[test]
    fn inner_pages_are_always_solid() {
        for path in PATHS.iter().filter(|p| **p != "/") {
            assert!(header_is_solid(is_scrolled(0.0), path));
        }
    }

    #[test]
    fn pathname_strips_query_and_fragment() {
        assert_eq!(pathname("/products?page=2"), "/products");
        assert_eq!(pathname("/about#team"), "/about");
        assert_eq!(pathname("?ref=ad"), "/");
        assert_eq!(pathname("/contact"), "/contact");
    }

    #[test]
    fn single_home_item_yields_single_link() {
        let items = vec![MenuItem::new(1u64, "Home", "/")];
        let links = link_views(&items, "/");

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label, "Home");
        assert_eq!(links[0].url, "/");
        assert_eq!(links[0].key, "1");
        assert!(links[0].active);
    }

    #[test]
    fn link_views_preserve_order_and_flag_targets() {
        let items = vec![
            MenuItem::new(3u64, "Contact", "/contact"),
            MenuItem::new(1u64, "Home", "/"),
            MenuItem::new("pdf", "Catalogue", "/catalogue.pdf").with_target("_blank"),
        ];
        let links = link_views(&items, "/contact");

        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Contact", "Home", "Catalogue"]);
        assert_eq!(
            links.iter().map(|l| l.active).collect::<Vec<_>>(),
            [true, false, false]
        );
        assert!(links[2].new_tab);
    }

    #[test]
    fn toggle_flips_between_states() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn navigation_closes_open_menu() {
        let mut menu = MobileMenu::Open;
        menu.on_route_change();
        assert_eq!(menu, MobileMenu::Closed);

        menu.on_route_change();
        assert_eq!(menu, MobileMenu::Closed);
    }

    #[test]
    fn quote_request_closes_menu_and_opens_modal_once() {
        let mut menu = MobileMenu::Open;
        let mut opened = 0;
        menu.request_quote(|| opened += 1);
        assert_eq!(menu, MobileMenu::Closed);
        assert_eq!(opened, 1);
    }
}
