//! Window scroll tracking.
//!
//! [`use_scroll_offset`] attaches a window-level `scroll` listener when the
//! calling component mounts and removes it when the component unmounts.
//!
//! - WASM: a `web_sys` listener feeds an unbounded channel; dropping the feed
//!   removes the listener.
//! - Native webviews: an injected script reports `window.scrollY` through the
//!   eval channel; a matching script detaches it on unmount.

use dioxus::prelude::*;

/// Reactive vertical scroll offset of the window, in CSS pixels.
pub fn use_scroll_offset() -> ReadOnlySignal<f64> {
    let mut offset = use_signal(|| 0.0_f64);

    use_future(move || async move {
        let Some(mut feed) = ScrollFeed::attach() else {
            tracing::warn!("window scroll events unavailable; header stays in its top state");
            return;
        };
        while let Some(y) = feed.next().await {
            if *offset.peek() != y {
                offset.set(y);
            }
        }
    });

    #[cfg(not(target_arch = "wasm32"))]
    use_drop(native::detach);

    offset.into()
}

#[cfg(target_arch = "wasm32")]
use web::ScrollFeed;

#[cfg(not(target_arch = "wasm32"))]
use native::ScrollFeed;

#[cfg(target_arch = "wasm32")]
mod web {
    use futures::StreamExt;
    use futures_channel::mpsc::{unbounded, UnboundedReceiver};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    const SCROLL_EVENT: &str = "scroll";

    pub(super) struct ScrollFeed {
        rx: UnboundedReceiver<f64>,
        window: web_sys::Window,
        listener: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl ScrollFeed {
        pub(super) fn attach() -> Option<Self> {
            let window = web_sys::window()?;
            let (tx, rx) = unbounded();

            // Seed with the current offset; the page may load already scrolled.
            let _ = tx.unbounded_send(window.scroll_y().unwrap_or(0.0));

            let reader = window.clone();
            let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
                let _ = tx.unbounded_send(reader.scroll_y().unwrap_or(0.0));
            });

            if let Err(err) = window
                .add_event_listener_with_callback(SCROLL_EVENT, listener.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "failed to attach scroll listener");
                return None;
            }
            tracing::debug!("scroll listener attached");

            Some(Self {
                rx,
                window,
                listener,
            })
        }

        pub(super) async fn next(&mut self) -> Option<f64> {
            self.rx.next().await
        }
    }

    impl Drop for ScrollFeed {
        fn drop(&mut self) {
            let _ = self.window.remove_event_listener_with_callback(
                SCROLL_EVENT,
                self.listener.as_ref().unchecked_ref(),
            );
            tracing::debug!("scroll listener removed");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use dioxus::prelude::*;

    // A single header per window, so one global slot for the handler is enough.
    const ATTACH_JS: &str = r#"
        if (window.__siteNavbarScroll) {
            window.removeEventListener("scroll", window.__siteNavbarScroll);
        }
        window.__siteNavbarScroll = () => dioxus.send(window.scrollY);
        window.addEventListener("scroll", window.__siteNavbarScroll, { passive: true });
        dioxus.send(window.scrollY);
    "#;

    const DETACH_JS: &str = r#"
        if (window.__siteNavbarScroll) {
            window.removeEventListener("scroll", window.__siteNavbarScroll);
            window.__siteNavbarScroll = undefined;
        }
    "#;

    pub(super) struct ScrollFeed {
        eval: document::Eval,
    }

    impl ScrollFeed {
        pub(super) fn attach() -> Option<Self> {
            tracing::debug!("scroll listener attached");
            Some(Self {
                eval: document::eval(ATTACH_JS),
            })
        }

        pub(super) async fn next(&mut self) -> Option<f64> {
            self.eval.recv::<f64>().await.ok()
        }
    }

    pub(super) fn detach() {
        let _ = document::eval(DETACH_JS);
        tracing::debug!("scroll listener removed");
    }
}
