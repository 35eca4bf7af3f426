use dioxus::prelude::*;

use crate::components::QuoteLauncher;

#[component]
pub fn Home() -> Element {
    let launcher = try_use_context::<QuoteLauncher>();

    rsx! {
        section { class: "page page-home",
            div { class: "page-home__hero",
                h1 { {crate::t!("home-title")} }
                p { {crate::t!("home-tagline")} }
                if let Some(launcher) = launcher {
                    div {
                        button {
                            r#type: "button",
                            class: "button button--accent button--md",
                            onclick: move |_| launcher.open(),
                            {crate::t!("home-cta")}
                        }
                    }
                }
            }
        }
    }
}
