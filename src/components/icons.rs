//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::{FileKind, Node};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuAppWindow as FileApp, LuArchive as FileArchive, LuBookOpen as FilePdf,
        LuChevronRight as ChevronRight, LuDownload as Download,
        LuExternalLink as Repository, LuFile as File, LuFileText as FileDoc,
        LuFolder as Folder, LuHouse as Home, LuImage as FileImage, LuLink as CopyLink,
        LuMoon as Moon, LuSun as Sun,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronRight as ChevronRight, BsDownload as Download, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkText as FileDoc, BsFileEarmarkZip as FileArchive, BsFolderFill as Folder,
        BsGithub as Repository, BsHouseFill as Home, BsLink45deg as CopyLink, BsMoonFill as Moon,
        BsSunFill as Sun, BsWindow as FileApp,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_DOC, FileDoc);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(FILE_APP, FileApp);
themed_icon!(DOWNLOAD, Download);
themed_icon!(COPY_LINK, CopyLink);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(REPOSITORY, Repository);

// =============================================================================
// Icon Selection
// =============================================================================

/// Icon for a file name, by extension.
pub fn file_icon(name: &str) -> Icon {
    match FileKind::from_name(name) {
        FileKind::Pdf => FILE_PDF,
        FileKind::Image => FILE_IMAGE,
        FileKind::Archive => FILE_ARCHIVE,
        FileKind::Executable => FILE_APP,
        FileKind::Document => FILE_DOC,
        FileKind::Unknown => FILE,
    }
}

/// Icon for a tree node.
pub fn node_icon(node: &Node) -> Icon {
    match node {
        Node::Folder(_) => FOLDER,
        Node::File(f) => file_icon(&f.name),
    }
}
