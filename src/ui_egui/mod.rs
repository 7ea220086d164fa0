//! egui front-end for the portal.
//!
//! `PortalApp` owns all state; pages and dialogs are rendered fresh each
//! frame and communicate through returned actions rather than callbacks.

pub mod app;
pub mod calendar;
pub mod dialogs;
pub mod theme;
pub mod viewport;
pub mod views;

pub use app::PortalApp;
