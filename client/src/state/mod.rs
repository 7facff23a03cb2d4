//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Persisted data lives in URL stores (`store`), one per page. Transient
//! chrome (theme, grouping, filters) lives in `ui` and never reaches the URL.

pub mod board;
pub mod store;
pub mod ui;
