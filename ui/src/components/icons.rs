//! Inline stroke icons (24×24 grid, `currentColor`).

use dioxus::prelude::*;

const DEFAULT_CLASS: &str = "site-navbar__icon";

#[component]
fn StrokeIcon(class: String, d: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d }
        }
    }
}

#[component]
pub fn MenuIcon(
    #[props(into, default = DEFAULT_CLASS.to_string())] class: String,
) -> Element {
    rsx! { StrokeIcon { class, d: "M4 6h16M4 12h16M4 18h16" } }
}

#[component]
pub fn CloseIcon(
    #[props(into, default = DEFAULT_CLASS.to_string())] class: String,
) -> Element {
    rsx! { StrokeIcon { class, d: "M18 6 6 18M6 6l12 12" } }
}

#[component]
pub fn PhoneIcon(
    #[props(into, default = DEFAULT_CLASS.to_string())] class: String,
) -> Element {
    rsx! {
        StrokeIcon {
            class,
            d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        }
    }
}

#[cfg(test)]
mod tests {
    const SOURCE: &str = include_str!("icons.rs");

    #[test]
    fn icons_are_hidden_from_assistive_tech() {
        assert!(SOURCE.contains(concat!("\"aria-", "hidden\": \"true\"")));
        assert!(!SOURCE.contains(concat!("aria_", "hidden:")));
    }
}
