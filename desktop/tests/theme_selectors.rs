#![cfg(test)]
/*!
Selector lint for the desktop build.

The header and quote dialog are styled purely through class names emitted by the
shared `ui` components. If a refactor renames a class in markup but not in CSS
(or the other way round) the desktop window silently loses styling. This test
pins the selectors the components rely on.

When renaming a selector, update the component markup, the stylesheet and the
lists below together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Page layout and quote dialog (theme stylesheet).
const THEME_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".page-home__hero",
    ".page-site__body",
    ".quote-modal {",
    ".quote-modal__backdrop",
    ".quote-modal__dialog",
    ".quote-modal__field",
    ".quote-modal__actions",
    ".quote-modal__cancel",
];

/// Header chrome (navbar stylesheet).
const NAVBAR_SELECTORS: &[&str] = &[
    ".site-navbar {",
    ".site-navbar--daylight",
    ".site-navbar--solid",
    ".site-navbar__inner",
    ".site-navbar__logo",
    ".site-navbar__links",
    ".site-navbar__link {",
    ".site-navbar__link--active",
    ".site-navbar__link-underline",
    ".site-navbar__actions",
    ".site-navbar__phone",
    ".site-navbar__toggle",
    ".site-navbar__mobile {",
    ".site-navbar__mobile-link--active",
    ".site-navbar__divider",
    ".button {",
    ".button--accent",
    ".button--md",
    ".button--full",
    // Desktop/mobile switch point
    "@media (min-width: 1024px)",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_contains_required_selectors() {
    let gaps = missing(THEME_CSS, THEME_SELECTORS);
    assert!(gaps.is_empty(), "theme stylesheet is missing:\n{}", gaps.join("\n"));
}

#[test]
fn navbar_contains_required_selectors() {
    let gaps = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(gaps.is_empty(), "navbar stylesheet is missing:\n{}", gaps.join("\n"));
}

#[test]
fn toggle_and_panel_hidden_on_wide_screens() {
    let (_, wide) = NAVBAR_CSS
        .split_once("@media (min-width: 1024px)")
        .expect("responsive block present");
    assert!(wide.contains(".site-navbar__toggle"));
    assert!(wide.contains(".site-navbar__mobile"));
    assert!(wide.contains("display: none"));
}
