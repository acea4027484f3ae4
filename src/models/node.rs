use serde::{Deserialize, Serialize};

// =============================================================================
// Tree Nodes
// =============================================================================

/// A single entry in the file index tree.
///
/// Deserialized from the tree document (`files.json`), which tags each
/// object with `"type": "file"` or `"type": "folder"`. Unknown fields are
/// ignored so the index generator can carry extra metadata without breaking
/// older clients.
///
/// # Invariants
///
/// - The tree is a finite, acyclic, rooted forest (the root is a plain
///   ordered `Vec<Node>` with no parent).
/// - Sibling names are expected to be unique; the resolver matches the first
///   occurrence, so duplicates resolve deterministically but ambiguously.
/// - `children` order is display order. Nothing is sorted after load.
/// - The tree is immutable for the lifetime of a session; a reload replaces
///   the whole tree.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File(FileNode),
    Folder(FolderNode),
}

/// A downloadable file entry.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FileNode {
    /// Display name, unique among siblings.
    pub name: String,
    /// Opaque size label (e.g. "1.2 MB"). Display only, never parsed.
    pub size: String,
    /// Opaque date label. Display only, never parsed.
    pub date: String,
    /// Download locator (typically an absolute URL).
    pub url: String,
    /// Optional free-form description shown on the detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A folder containing an ordered list of child nodes.
///
/// An empty `children` list is a valid state ("empty folder"), not an error.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FolderNode {
    /// Display name, unique among siblings.
    pub name: String,
    /// Children in display order.
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Node {
    /// Display name of this entry.
    pub fn name(&self) -> &str {
        match self {
            Node::File(f) => &f.name,
            Node::Folder(d) => &d.name,
        }
    }

    /// Check if this entry is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    /// Get the file payload (files only).
    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(f) => Some(f),
            Node::Folder(_) => None,
        }
    }

    /// Get the folder payload (folders only).
    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Node::Folder(d) => Some(d),
            Node::File(_) => None,
        }
    }
}

// =============================================================================
// File Kind (icon selection)
// =============================================================================

/// Coarse file classification used for icon selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Document,
    Pdf,
    Image,
    Archive,
    Executable,
    Unknown,
}

impl FileKind {
    /// Detect file kind from the name's extension (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        match name.rsplit('.').next().map(|s| s.to_lowercase()).as_deref() {
            Some("pdf") => Self::Pdf,
            Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "svg") => Self::Image,
            Some("zip" | "rar" | "7z" | "tar" | "gz") => Self::Archive,
            Some("exe" | "msi") => Self::Executable,
            Some("doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" | "txt" | "md") => {
                Self::Document
            }
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_nodes() {
        let json = r#"[
            {"type": "folder", "name": "docs", "children": [
                {"type": "file", "name": "a.txt", "size": "1 KB",
                 "date": "2024-01-01", "url": "https://dl.example.com/a.txt"}
            ]},
            {"type": "file", "name": "readme.md", "size": "2 KB",
             "date": "2024-02-02", "url": "https://dl.example.com/readme.md",
             "description": "Read me first"}
        ]"#;

        let tree: Vec<Node> = serde_json::from_str(json).expect("valid tree document");
        assert_eq!(tree.len(), 2);
        assert!(tree[0].is_folder());
        assert_eq!(tree[0].name(), "docs");
        assert_eq!(tree[0].as_folder().unwrap().children.len(), 1);

        let file = tree[1].as_file().expect("second entry is a file");
        assert_eq!(file.name, "readme.md");
        assert_eq!(file.description.as_deref(), Some("Read me first"));
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"type": "file", "name": "x.bin", "size": "-", "date": "-",
                       "url": "u", "checksum": "deadbeef"}"#;
        let node: Node = serde_json::from_str(json).expect("unknown fields are ignored");
        assert_eq!(node.name(), "x.bin");
    }

    #[test]
    fn test_empty_folder_is_valid() {
        let json = r#"{"type": "folder", "name": "empty", "children": []}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert!(node.as_folder().unwrap().children.is_empty());
    }

    #[test]
    fn test_file_kind_detection() {
        assert_eq!(FileKind::from_name("manual.pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_name("photo.JPG"), FileKind::Image);
        assert_eq!(FileKind::from_name("bundle.tar"), FileKind::Archive);
        assert_eq!(FileKind::from_name("setup.exe"), FileKind::Executable);
        assert_eq!(FileKind::from_name("notes.txt"), FileKind::Document);
        assert_eq!(FileKind::from_name("data.xyz"), FileKind::Unknown);
        assert_eq!(FileKind::from_name("no_extension"), FileKind::Unknown);
    }
}
