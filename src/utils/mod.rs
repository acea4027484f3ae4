//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_json`] - Network fetching with timeout
//! - [`dom`] - Location, document head, storage, and clipboard helpers
//! - [`save_url_list`] - Blob-based download of the aggregated URL list

pub mod dom;
mod download;
mod fetch;

pub use download::save_url_list;
pub use fetch::{RaceResult, fetch_json, race_with_timeout};
