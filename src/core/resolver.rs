//! Path resolution over the file index tree.
//!
//! Walks an ordered path of segment names down the tree and produces the
//! [`ViewState`] for that location. Resolution is a pure function of
//! `(tree, path)`: no side effects, no I/O, and no failure mode other than
//! the [`ViewState::NotFound`] value.

use crate::models::{Node, ViewState};

/// Resolve a path against the tree.
///
/// - The empty path is the root listing, even for an empty tree.
/// - Each segment is matched by exact, case-sensitive name equality against
///   the current level. No normalization or percent-decoding happens here;
///   that is the location layer's job.
/// - A folder match on the last segment yields its children as a listing;
///   a file match on the last segment yields its detail view; anything else
///   is `NotFound` (including a file matched with segments remaining).
///
/// # Tie-break quirk
///
/// When a folder and a file share a name at the same level, the folder wins.
/// This matches the behavior the index has always had; changing the
/// precedence would silently re-route existing links, so it is kept.
pub fn resolve(tree: &[Node], path: &[String]) -> ViewState {
    if path.is_empty() {
        return ViewState::Listing(tree.to_vec());
    }

    let mut level = tree;
    for (i, segment) in path.iter().enumerate() {
        let is_last = i == path.len() - 1;

        // Folders take precedence over a same-named file.
        if let Some(folder) = level
            .iter()
            .filter_map(Node::as_folder)
            .find(|d| d.name == *segment)
        {
            if is_last {
                return ViewState::Listing(folder.children.clone());
            }
            level = &folder.children;
            continue;
        }

        if is_last
            && let Some(file) = level
                .iter()
                .filter_map(Node::as_file)
                .find(|f| f.name == *segment)
        {
            return ViewState::FileDetail(file.clone());
        }

        return ViewState::NotFound;
    }

    // Unreachable: the loop always returns on the last segment.
    ViewState::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileNode, FolderNode};

    fn file(name: &str) -> Node {
        Node::File(FileNode {
            name: name.to_string(),
            size: "1 KB".to_string(),
            date: "2024-01-01".to_string(),
            url: format!("https://dl.example.com/{name}"),
            description: None,
        })
    }

    fn folder(name: &str, children: Vec<Node>) -> Node {
        Node::Folder(FolderNode {
            name: name.to_string(),
            children,
            description: None,
        })
    }

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    fn test_tree() -> Vec<Node> {
        vec![
            folder(
                "docs",
                vec![file("a.txt"), folder("guides", vec![file("intro.pdf")])],
            ),
            file("top.zip"),
        ]
    }

    #[test]
    fn test_empty_path_is_root_listing() {
        let tree = test_tree();
        assert_eq!(resolve(&tree, &[]), ViewState::Listing(tree.clone()));
        // Holds for the empty tree too.
        assert_eq!(resolve(&[], &[]), ViewState::Listing(vec![]));
    }

    #[test]
    fn test_folder_path_lists_children() {
        let tree = test_tree();
        match resolve(&tree, &path(&["docs"])) {
            ViewState::Listing(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].name(), "a.txt");
            }
            other => panic!("expected listing, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_file_detail() {
        let tree = test_tree();
        match resolve(&tree, &path(&["docs", "guides", "intro.pdf"])) {
            ViewState::FileDetail(f) => assert_eq!(f.name, "intro.pdf"),
            other => panic!("expected detail, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_boundary() {
        let tree = vec![folder("docs", vec![file("a.txt")])];

        assert_eq!(resolve(&tree, &path(&["docs", "missing.txt"])), ViewState::NotFound);
        assert!(matches!(
            resolve(&tree, &path(&["docs", "a.txt"])),
            ViewState::FileDetail(_)
        ));
        match resolve(&tree, &path(&["docs"])) {
            ViewState::Listing(items) => assert_eq!(items.len(), 1),
            other => panic!("expected listing, got {other:?}"),
        }
    }

    #[test]
    fn test_file_with_trailing_segments_is_not_found() {
        let tree = test_tree();
        // top.zip exists but cannot be descended into.
        assert_eq!(resolve(&tree, &path(&["top.zip", "inner"])), ViewState::NotFound);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let tree = test_tree();
        assert_eq!(resolve(&tree, &path(&["Docs"])), ViewState::NotFound);
    }

    #[test]
    fn test_folder_wins_name_tie() {
        // A file and a folder both named "dual" at the same level.
        let tree = vec![file("dual"), folder("dual", vec![file("inner.txt")])];
        match resolve(&tree, &path(&["dual"])) {
            ViewState::Listing(items) => assert_eq!(items[0].name(), "inner.txt"),
            other => panic!("folder should win the tie, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_folder_lists_empty() {
        let tree = vec![folder("void", vec![])];
        assert_eq!(resolve(&tree, &path(&["void"])), ViewState::Listing(vec![]));
    }

    #[test]
    fn test_absent_tree_behaves_like_empty() {
        assert_eq!(resolve(&[], &path(&["anything"])), ViewState::NotFound);
        assert_eq!(resolve(&[], &[]), ViewState::Listing(vec![]));
    }
}
