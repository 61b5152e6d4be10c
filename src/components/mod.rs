//! Shared UI components.

pub mod navbar;
pub mod protected_route;
pub mod toast_tray;
