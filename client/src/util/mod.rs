//! Browser seams shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper compiles to a no-op (or `None`) without the `hydrate` feature
//! so server rendering and native tests never touch `web_sys`.

pub mod clipboard;
pub mod dark_mode;
pub mod history;
