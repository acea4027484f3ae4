//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Node`], [`FileNode`], [`FolderNode`] - The file index tree
//! - [`ViewState`] - What the current path resolves to
//! - [`FileKind`] - Extension-based classification for icons
//! - [`SiteConfig`], [`Quote`] - Runtime configuration and 404 flavor text

mod node;
mod site;
mod view;

pub use node::{FileKind, FileNode, FolderNode, Node};
pub use site::{Quote, SiteConfig};
pub use view::ViewState;
