use super::{LocationProvider, Url};
use core::fmt;
use leptos::{
    ev,
    leptos_dom::helpers::{window, window_event_listener},
    prelude::*,
};
use wasm_bindgen::JsValue;

/// Location provider that routes on `window.location.hash`.
///
/// The path in front of the `#` is never consulted, so the app can be served as static
/// files without server-side route configuration.
#[derive(Clone)]
pub struct HashUrl {
    url: ArcRwSignal<Url>,
}

impl fmt::Debug for HashUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashUrl").finish_non_exhaustive()
    }
}

impl LocationProvider for HashUrl {
    type Error = JsValue;

    fn new() -> Result<Self, JsValue> {
        let url = ArcRwSignal::new(Self::current()?);
        Ok(Self { url })
    }

    fn as_url(&self) -> &ArcRwSignal<Url> {
        &self.url
    }

    fn current() -> Result<Url, Self::Error> {
        let hash = window().location().hash()?;
        Ok(Url::from_fragment(&hash))
    }

    fn init(&self) {
        // handle hashchange (links to `#/...`, back/forward, manual edits)
        let cb = {
            let url = self.url.clone();
            move |_: web_sys::HashChangeEvent| match Self::current() {
                Ok(new_url) => {
                    let changed = *url.read_untracked() != new_url;
                    if changed {
                        url.set(new_url);
                    }
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("{e:?}");
                    #[cfg(not(feature = "tracing"))]
                    web_sys::console::error_1(&e);
                }
            }
        };
        let handle = window_event_listener(ev::hashchange, cb);
        on_cleanup(move || handle.remove());
    }

    fn navigate(path: &str) -> Result<(), Self::Error> {
        window().location().set_hash(&super::href(path))
    }
}
