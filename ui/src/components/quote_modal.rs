//! Bulk quote request dialog opened from the header's call-to-action.
//!
//! Requests are captured in the log only; delivery to a sales inbox is left to
//! the hosting deployment.

use dioxus::prelude::*;
use tracing::info;

use crate::t;

/// Context handle letting any page open the host's quote dialog.
#[derive(Clone, Copy, PartialEq)]
pub struct QuoteLauncher(pub Signal<bool>);

impl QuoteLauncher {
    pub fn open(self) {
        let mut flag = self.0;
        flag.set(true);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub product: String,
    pub quantity: String,
}

impl QuoteRequest {
    /// Square metres, when the quantity field holds a positive whole number.
    pub fn quantity_m2(&self) -> Option<u32> {
        self.quantity.trim().parse().ok().filter(|q| *q > 0)
    }

    pub fn is_complete(&self) -> bool {
        let email = self.email.trim();
        !self.name.trim().is_empty()
            && email.contains('@')
            && !email.starts_with('@')
            && !email.ends_with('@')
    }
}

#[component]
pub fn QuoteModal(open: bool, on_close: EventHandler<()>) -> Element {
    let mut request = use_signal(QuoteRequest::default);

    if !open {
        return rsx! {};
    }

    let ready = request.read().is_complete();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let captured = request.peek().clone();
        if !captured.is_complete() {
            return;
        }
        info!(
            name = %captured.name,
            email = %captured.email,
            product = %captured.product,
            quantity_m2 = ?captured.quantity_m2(),
            "bulk quote requested"
        );
        request.set(QuoteRequest::default());
        on_close.call(());
    };

    rsx! {
        div {
            class: "quote-modal",
            role: "dialog",
            aria_modal: "true",
            aria_labelledby: "quote-modal-title",
            div { class: "quote-modal__backdrop", onclick: move |_| on_close.call(()) }
            form { class: "quote-modal__dialog", onsubmit: submit,
                h2 { id: "quote-modal-title", {t!("quote-title")} }
                p { {t!("quote-intro")} }

                label { class: "quote-modal__field",
                    span { {t!("quote-name")} }
                    input {
                        r#type: "text",
                        required: true,
                        value: "{request.read().name}",
                        oninput: move |evt| request.write().name = evt.value(),
                    }
                }
                label { class: "quote-modal__field",
                    span { {t!("quote-email")} }
                    input {
                        r#type: "email",
                        required: true,
                        value: "{request.read().email}",
                        oninput: move |evt| request.write().email = evt.value(),
                    }
                }
                label { class: "quote-modal__field",
                    span { {t!("quote-product")} }
                    input {
                        r#type: "text",
                        value: "{request.read().product}",
                        oninput: move |evt| request.write().product = evt.value(),
                    }
                }
                label { class: "quote-modal__field",
                    span { {t!("quote-quantity")} }
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{request.read().quantity}",
                        oninput: move |evt| request.write().quantity = evt.value(),
                    }
                }

                div { class: "quote-modal__actions",
                    button {
                        r#type: "button",
                        class: "quote-modal__cancel",
                        onclick: move |_| on_close.call(()),
                        {t!("quote-cancel")}
                    }
                    button {
                        r#type: "submit",
                        class: "button button--accent button--md",
                        disabled: !ready,
                        {t!("quote-submit")}
                    }
                }
            }
        }
    }
}
