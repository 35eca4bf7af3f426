use dioxus::prelude::*;

use ui::components::{QuoteLauncher, QuoteModal, SiteNavbar};
use ui::core::config::SiteConfig;
use ui::views::{Home, SitePage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    SitePage { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    let config = SiteConfig::from_env();
    if let Err(err) = dioxus::logger::init(config.log_level) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let config = use_context_provider(SiteConfig::from_env);
    use_context_provider(|| config.cms());

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        Router::<Route> {}
    }
}

/// Site chrome around every routed page: header, page outlet and the quote
/// dialog the header opens.
#[component]
fn WebLayout() -> Element {
    let route: Route = use_route();
    let config = use_context::<SiteConfig>();
    let mut quote_open = use_signal(|| false);
    use_context_provider(|| QuoteLauncher(quote_open));

    rsx! {
        SiteNavbar {
            current_path: route.to_string(),
            theme: config.theme,
            on_open_modal: move |_| quote_open.set(true),
        }
        Outlet::<Route> {}
        QuoteModal {
            open: quote_open(),
            on_close: move |_| quote_open.set(false),
        }
    }
}
