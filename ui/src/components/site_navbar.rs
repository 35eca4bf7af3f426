use dioxus::prelude::*;

use super::button::{AccentButton, ButtonSize};
use super::icons::{CloseIcon, MenuIcon, PhoneIcon};
use crate::cms::{load_header_menu, load_settings, use_cms};
use crate::core::nav::{self, MobileMenu, ROOT_PATH};
use crate::core::scroll::use_scroll_offset;
use crate::core::theme::NavTheme;
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));
const LOGO: Asset = asset!("/assets/logo.svg");

const FALLBACK_SITE_NAME: &str = "Style Surface";
const MOBILE_PANEL_ID: &str = "site-navbar-mobile";

/// Fixed site header.
///
/// The shared crate does not know each platform's `Route` enum, so hosts pass
/// the rendered route (`route.to_string()`) as `current_path`. Menu links and
/// contact details come from the [`Cms`](crate::cms::Cms) in context; both
/// reads start on mount, run independently and are cancelled on unmount.
/// Until they resolve (or if they fail) the header renders without links and
/// without a phone number.
///
/// Host usage:
/// ```ignore
/// #[component]
/// fn Layout() -> Element {
///     let route: Route = use_route();
///     let mut quote_open = use_signal(|| false);
///     rsx! {
///         SiteNavbar {
///             current_path: route.to_string(),
///             on_open_modal: move |_| quote_open.set(true),
///         }
///         Outlet::<Route> {}
///     }
/// }
/// ```
#[component]
pub fn SiteNavbar(
    #[props(into)] current_path: String,
    on_open_modal: EventHandler<()>,
    #[props(default)] theme: NavTheme,
) -> Element {
    i18n::init();

    let cms = use_cms();
    let menu_resource = use_resource({
        let cms = cms.clone();
        move || {
            let cms = cms.clone();
            async move { load_header_menu(&cms).await }
        }
    });
    let settings_resource = use_resource(move || {
        let cms = cms.clone();
        async move { load_settings(&cms).await }
    });

    let path = nav::pathname(&current_path).to_string();

    let mut mobile_menu = use_signal(MobileMenu::default);
    use_close_on_navigation(&path, mobile_menu);

    let offset = use_scroll_offset();
    let solid = nav::header_is_solid(nav::is_scrolled(offset()), &path);
    let menu_open = mobile_menu().is_open();

    #[cfg(debug_assertions)]
    tracing::debug!(%path, solid, menu_open, "SiteNavbar render");

    let links = match &*menu_resource.read() {
        Some(items) => nav::link_views(items, &path),
        None => Vec::new(),
    };
    let site = settings_resource.cloned().flatten();

    let site_name = site
        .as_ref()
        .map(|s| s.site_name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_SITE_NAME)
        .to_string();
    let logo_alt = t!("nav-logo-alt", site = site_name.as_str());
    let toggle_label = if menu_open {
        t!("nav-close-menu")
    } else {
        t!("nav-open-menu")
    };
    let quote_label = t!("nav-get-quote");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav {
            class: theme.header_class(solid),
            aria_label: t!("nav-primary"),
            div { class: "site-navbar__inner",
                Link { to: ROOT_PATH, class: "site-navbar__logo",
                    img {
                        class: "site-navbar__logo-img",
                        src: LOGO,
                        alt: "{logo_alt}",
                        width: "150",
                        height: "40",
                    }
                }

                // Desktop links
                div { class: "site-navbar__links",
                    for link in links.iter() {
                        Link {
                            key: "{link.key}",
                            to: link.url.clone(),
                            new_tab: link.new_tab,
                            class: desktop_link_class(link.active),
                            "{link.label}"
                            span { class: "site-navbar__link-underline" }
                        }
                    }
                }

                div { class: "site-navbar__actions",
                    if let Some(site) = site.as_ref() {
                        a {
                            class: "site-navbar__phone",
                            href: site.phone_href(),
                            aria_label: t!("nav-call-us", phone = site.phone.as_str()),
                            span { class: "site-navbar__phone-icon", PhoneIcon {} }
                            span { "{site.phone}" }
                        }
                    }
                    AccentButton {
                        class: "site-navbar__quote",
                        onclick: move |_| on_open_modal.call(()),
                        "{quote_label}"
                    }
                }

                button {
                    r#type: "button",
                    class: "site-navbar__toggle",
                    aria_label: "{toggle_label}",
                    aria_expanded: "{menu_open}",
                    aria_controls: MOBILE_PANEL_ID,
                    onclick: move |_| mobile_menu.write().toggle(),
                    if menu_open {
                        CloseIcon { class: "site-navbar__icon site-navbar__icon--lg" }
                    } else {
                        MenuIcon { class: "site-navbar__icon site-navbar__icon--lg" }
                    }
                }
            }

            if menu_open {
                div { id: MOBILE_PANEL_ID, class: "site-navbar__mobile",
                    for link in links.iter() {
                        Link {
                            key: "{link.key}",
                            to: link.url.clone(),
                            new_tab: link.new_tab,
                            class: mobile_link_class(link.active),
                            "{link.label}"
                        }
                    }
                    div { class: "site-navbar__divider" }
                    AccentButton {
                        size: ButtonSize::Full,
                        onclick: move |_| quote_from_mobile(mobile_menu, on_open_modal),
                        "{quote_label}"
                    }
                }
            }
        }
    }
}

/// Closes the mobile panel whenever the rendered path changes.
fn use_close_on_navigation(path: &str, mut menu: Signal<MobileMenu>) {
    let path = path.to_string();
    use_effect(use_reactive((&path,), move |(_path,)| {
        menu.write().on_route_change();
    }));
}

/// The panel is closed before the dialog callback runs.
fn quote_from_mobile(mut menu: Signal<MobileMenu>, on_open_modal: EventHandler<()>) {
    let mut state = *menu.peek();
    state.request_quote(|| {
        menu.set(MobileMenu::Closed);
        on_open_modal.call(());
    });
    menu.set(state);
}

fn desktop_link_class(active: bool) -> &'static str {
    if active {
        "site-navbar__link site-navbar__link--active"
    } else {
        "site-navbar__link"
    }
}

fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "site-navbar__mobile-link site-navbar__mobile-link--active"
    } else {
        "site-navbar__mobile-link"
    }
}
