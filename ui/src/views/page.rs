//! Catch-all view for CMS-managed pages. The heading comes from whichever
//! menu links to the page; otherwise it is derived from the last path segment.

use dioxus::prelude::*;

use crate::cms::{use_cms, MenuItem, Menus};
use crate::core::nav::ROOT_PATH;

#[component]
pub fn SitePage(segments: Vec<String>) -> Element {
    let path = page_path(&segments);
    let cms = use_cms();
    let menus = use_resource(move || {
        let cms = cms.clone();
        async move { cms.get_menus().await.ok() }
    });

    let title = match &*menus.read() {
        Some(Some(menus)) => menu_label(menus, &path),
        _ => None,
    }
    .unwrap_or_else(|| title_from_path(&path));

    rsx! {
        section { class: "page page-site",
            h1 { "{title}" }
            p { class: "page-site__body", {crate::t!("page-placeholder")} }
            Link { to: ROOT_PATH, {crate::t!("page-back-home")} }
        }
    }
}

fn page_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

fn menu_label(menus: &Menus, path: &str) -> Option<String> {
    menus
        .header
        .iter()
        .chain(menus.footer.iter())
        .find(|item: &&MenuItem| item.url == path)
        .map(|item| item.label.clone())
}

fn title_from_path(path: &str) -> String {
    let slug = path.rsplit('/').find(|s| !s.is_empty()).unwrap_or_default();
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
