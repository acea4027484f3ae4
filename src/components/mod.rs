//! UI components built with Leptos.
//!
//! - [`router`] - Location sync and the root view (main entry point)
//! - [`browser`] - File index browser UI (listing, detail, 404)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;
pub mod router;

pub use router::Router;
