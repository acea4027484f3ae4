//! Core navigation logic for the file index.
//!
//! This module provides:
//! - [`resolve`] - Path resolution to a [`crate::models::ViewState`]
//! - [`collect_download_refs`] - Recursive download-URL collection
//! - [`NavigationState`] - Current path ownership and location sync

mod aggregator;
pub mod error;
mod navigation;
mod resolver;

pub use aggregator::collect_download_refs;
pub use navigation::{NavigationState, location_to_path, path_to_location};
pub use resolver::resolve;
