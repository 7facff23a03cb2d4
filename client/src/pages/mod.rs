//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its URL store for as long as it is mounted and delegates
//! rendering details to `components`.

pub mod board;
pub mod home;
pub mod notepad;
