//! Copy-to-clipboard for the Share button.
//!
//! Tries the async Clipboard API first. If it is missing or rejects (no
//! permission, insecure context), falls back to selecting a hidden textarea
//! and running the legacy `copy` command. Failures are logged, never shown.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Which mechanism placed the text on the clipboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyMethod {
    /// `navigator.clipboard.writeText`.
    Clipboard,
    /// Hidden textarea + `document.execCommand("copy")`.
    Legacy,
    /// Neither path worked.
    Failed,
}

impl CopyMethod {
    #[must_use]
    pub fn copied(self) -> bool {
        !matches!(self, Self::Failed)
    }

    /// Button label while feedback is showing.
    #[must_use]
    pub fn label(self) -> &'static str {
        if self.copied() { "Copied!" } else { "Copy failed" }
    }
}

/// Copy `text` to the system clipboard.
pub async fn copy_text(text: &str) -> CopyMethod {
    #[cfg(feature = "hydrate")]
    {
        if write_with_clipboard_api(text).await {
            return CopyMethod::Clipboard;
        }
        if write_with_exec_command(text) {
            return CopyMethod::Legacy;
        }
        log::warn!("clipboard copy failed on both paths");
        CopyMethod::Failed
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        CopyMethod::Failed
    }
}

#[cfg(feature = "hydrate")]
async fn write_with_clipboard_api(text: &str) -> bool {
    let Some(clipboard) = web_sys::window().and_then(|w| w.navigator().clipboard()) else {
        return false;
    };
    match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await {
        Ok(_) => true,
        Err(e) => {
            log::debug!("clipboard.writeText rejected: {e:?}");
            false
        }
    }
}

#[cfg(feature = "hydrate")]
fn write_with_exec_command(text: &str) -> bool {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Some(area) = document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
    else {
        return false;
    };

    area.set_value(text);
    let _ = area.set_attribute("readonly", "");
    let _ = area.set_attribute("style", "position:fixed;top:0;left:0;opacity:0;");
    if body.append_child(&area).is_err() {
        return false;
    }
    area.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);
    let _ = body.remove_child(&area);
    copied
}
