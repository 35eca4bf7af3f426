use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Md,
    Full,
}

/// Accent call-to-action button.
#[component]
pub fn AccentButton(
    #[props(default)] size: ButtonSize,
    #[props(into, default)] class: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let size_class = match size {
        ButtonSize::Md => "button--md",
        ButtonSize::Full => "button--full",
    };

    rsx! {
        button {
            r#type: "button",
            class: "button button--accent {size_class} {class}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
