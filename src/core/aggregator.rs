//! Recursive collection of download URLs under a folder.

use crate::models::{FolderNode, Node};

/// Collect every file URL reachable beneath a folder.
///
/// Pre-order, left-to-right depth-first traversal of `children` as stored;
/// no sorting, no deduplication. Uses an explicit stack so tree depth never
/// grows the call stack.
///
/// An empty result is a valid "nothing to do" signal (the folder is empty,
/// directly or transitively), which callers surface as a notice rather than
/// producing an empty artifact.
pub fn collect_download_refs(folder: &FolderNode) -> Vec<String> {
    let mut refs = Vec::new();
    // Reverse push order so pop() walks children left to right.
    let mut stack: Vec<&Node> = folder.children.iter().rev().collect();

    while let Some(node) = stack.pop() {
        match node {
            Node::File(f) => refs.push(f.url.clone()),
            Node::Folder(d) => stack.extend(d.children.iter().rev()),
        }
    }

    refs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileNode;

    fn file(name: &str, url: &str) -> Node {
        Node::File(FileNode {
            name: name.to_string(),
            size: "-".to_string(),
            date: "-".to_string(),
            url: url.to_string(),
            description: None,
        })
    }

    fn folder(name: &str, children: Vec<Node>) -> FolderNode {
        FolderNode {
            name: name.to_string(),
            children,
            description: None,
        }
    }

    #[test]
    fn test_preorder_left_to_right() {
        // [file A, folder [file B], file C] must yield [A, B, C].
        let root = folder(
            "root",
            vec![
                file("a", "ref-a"),
                Node::Folder(folder("mid", vec![file("b", "ref-b")])),
                file("c", "ref-c"),
            ],
        );
        assert_eq!(collect_download_refs(&root), vec!["ref-a", "ref-b", "ref-c"]);
    }

    #[test]
    fn test_empty_folder_yields_empty() {
        let root = folder("root", vec![]);
        assert!(collect_download_refs(&root).is_empty());
    }

    #[test]
    fn test_transitively_empty_yields_empty() {
        let root = folder(
            "root",
            vec![
                Node::Folder(folder("a", vec![Node::Folder(folder("b", vec![]))])),
                Node::Folder(folder("c", vec![])),
            ],
        );
        assert!(collect_download_refs(&root).is_empty());
    }

    #[test]
    fn test_deep_nesting_does_not_recurse() {
        // 10_000 levels would overflow a naive recursive walk.
        let mut node = folder("leaf", vec![file("deep", "ref-deep")]);
        for i in 0..10_000 {
            node = folder(&format!("level{i}"), vec![Node::Folder(node)]);
        }
        assert_eq!(collect_download_refs(&node), vec!["ref-deep"]);
    }

    #[test]
    fn test_order_across_siblings_and_depth() {
        let root = folder(
            "root",
            vec![
                Node::Folder(folder(
                    "x",
                    vec![file("1", "r1"), Node::Folder(folder("y", vec![file("2", "r2")]))],
                )),
                file("3", "r3"),
                Node::Folder(folder("z", vec![file("4", "r4")])),
            ],
        );
        assert_eq!(collect_download_refs(&root), vec!["r1", "r2", "r3", "r4"]);
    }
}
