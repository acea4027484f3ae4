//! File index browser UI components.
//!
//! Components:
//! - [`Browser`] - Main view (header, breadcrumb, content, footer)
//! - [`FileList`] - Listing of a folder's children
//! - [`FileDetail`] - Per-file detail page with download actions
//! - [`NotFound`] - 404 page with quote-of-the-day

#[allow(clippy::module_inception)]
mod browser;
mod breadcrumb;
mod detail;
mod file_list;
mod footer;
mod header;
mod not_found;

pub use browser::Browser;
pub use detail::FileDetail;
pub use file_list::FileList;
pub use not_found::NotFound;
