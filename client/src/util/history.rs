//! `window.location` / `window.history` as a [`dhek::Location`].

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use dhek::Location;

/// The page's address bar. Stateless; every call goes to `web_sys::window()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

impl Location for BrowserLocation {
    fn href(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?.location().href().ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    /// `history.replaceState`, so edits never add back-button entries.
    fn replace(&self, href: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
                return;
            };
            if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href)) {
                log::warn!("history.replaceState failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = href;
        }
    }
}
