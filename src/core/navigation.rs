//! Navigation state and location synchronization.
//!
//! The browser's URL path and the in-memory current path are kept in sync
//! bidirectionally:
//!
//! - Internal navigation (`navigate_to` and friends) updates the path and
//!   reports the location string the caller must push to the history.
//! - External navigation (back/forward, reported via `popstate`) is applied
//!   with [`NavigationState::apply_external`], which never produces an
//!   outbound write, so an echo loop is impossible by construction.
//!
//! The sync guard is the `synced` field: the location string this state
//! believes the environment currently shows. An internal navigation only
//! requests a history write when the new location differs from it.
//!
//! This type is deliberately free of browser bindings so the whole state
//! machine is testable on the host; the Leptos layer owns the single
//! instance and performs the actual `pushState` calls.

/// Parse a URL path into path segments.
///
/// Splits on `/` and discards empty segments, so `"/a//b/"` and `"/a/b"`
/// both yield `["a", "b"]`. Any string degrades to some path (possibly
/// empty); malformed input is never an error.
pub fn location_to_path(pathname: &str) -> Vec<String> {
    pathname
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render path segments as a URL path.
///
/// The empty path maps to `"/"`.
pub fn path_to_location(path: &[String]) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", path.join("/"))
    }
}

/// The single owner of the current navigation path.
///
/// Created once at session start from the environment's initial location,
/// then mutated only through its public operations. Collaborators read the
/// current path by value and express navigation intents through the owner.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    /// Current path segments. Single source of truth.
    current: Vec<String>,
    /// Location string last known to be applied in the environment.
    synced: String,
}

impl NavigationState {
    /// Derive the initial state from the environment's starting location.
    pub fn from_location(pathname: &str) -> Self {
        Self {
            current: location_to_path(pathname),
            synced: pathname.to_string(),
        }
    }

    /// Current path segments.
    pub fn current(&self) -> &[String] {
        &self.current
    }

    /// Current path rendered as a location string.
    pub fn location(&self) -> String {
        path_to_location(&self.current)
    }

    /// Replace the current path unconditionally.
    ///
    /// No validation against the tree happens here; an invalid path simply
    /// resolves to `NotFound` downstream. Returns the location string to
    /// push to the history, or `None` when the environment already shows it.
    #[must_use = "a returned location must be pushed to the history"]
    pub fn navigate_to(&mut self, path: Vec<String>) -> Option<String> {
        self.current = path;
        let location = self.location();
        if location != self.synced {
            self.synced = location.clone();
            Some(location)
        } else {
            None
        }
    }

    /// Descend into a child of the current path.
    #[must_use = "a returned location must be pushed to the history"]
    pub fn navigate_into(&mut self, segment: &str) -> Option<String> {
        let mut path = self.current.clone();
        path.push(segment.to_string());
        self.navigate_to(path)
    }

    /// Return to the root listing.
    #[must_use = "a returned location must be pushed to the history"]
    pub fn navigate_home(&mut self) -> Option<String> {
        self.navigate_to(Vec::new())
    }

    /// Apply a location change that originated in the environment
    /// (back/forward navigation).
    ///
    /// Returns `true` when the current path actually changed. Never requests
    /// an outbound history write: the environment is already at `pathname`.
    pub fn apply_external(&mut self, pathname: &str) -> bool {
        self.synced = pathname.to_string();
        let path = location_to_path(pathname);
        if path != self.current {
            self.current = path;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_location_to_path() {
        assert_eq!(location_to_path("/"), Vec::<String>::new());
        assert_eq!(location_to_path(""), Vec::<String>::new());
        assert_eq!(location_to_path("/a/b"), path(&["a", "b"]));
        // Empty segments are discarded.
        assert_eq!(location_to_path("//a///b/"), path(&["a", "b"]));
        // Garbage degrades to a path, never an error.
        assert_eq!(location_to_path("////"), Vec::<String>::new());
    }

    #[test]
    fn test_path_to_location() {
        assert_eq!(path_to_location(&[]), "/");
        assert_eq!(path_to_location(&path(&["a", "b"])), "/a/b");
    }

    #[test]
    fn test_location_round_trip() {
        for loc in ["/", "/a", "/a/b/c", "/docs/guides"] {
            let p = location_to_path(loc);
            assert_eq!(path_to_location(&location_to_path(&path_to_location(&p))), loc);
        }
    }

    #[test]
    fn test_initial_state_from_location() {
        let nav = NavigationState::from_location("/docs/a.txt");
        assert_eq!(nav.current(), &path(&["docs", "a.txt"]));
        assert_eq!(nav.location(), "/docs/a.txt");
    }

    #[test]
    fn test_navigate_to_requests_write_once() {
        let mut nav = NavigationState::from_location("/");
        assert_eq!(nav.navigate_to(path(&["x"])), Some("/x".to_string()));
        // Same target again: path is replaced, but the environment already
        // shows /x, so no second write.
        assert_eq!(nav.navigate_to(path(&["x"])), None);
    }

    #[test]
    fn test_navigate_into_and_home() {
        let mut nav = NavigationState::from_location("/docs");
        assert_eq!(nav.navigate_into("guides"), Some("/docs/guides".to_string()));
        assert_eq!(nav.current(), &path(&["docs", "guides"]));
        assert_eq!(nav.navigate_home(), Some("/".to_string()));
        assert!(nav.current().is_empty());
    }

    #[test]
    fn test_unnormalized_start_location_is_rewritten() {
        // The environment starts at an unnormalized location; the first
        // navigation to the same logical path normalizes it in the history.
        let mut nav = NavigationState::from_location("/a//b/");
        assert_eq!(nav.current(), &path(&["a", "b"]));
        assert_eq!(nav.navigate_to(path(&["a", "b"])), Some("/a/b".to_string()));
    }

    #[test]
    fn test_external_application_is_idempotent() {
        let mut nav = NavigationState::from_location("/");
        assert!(nav.apply_external("/a/b"));
        // Second application of the same location: no change, and
        // apply_external can never produce an outbound write.
        assert!(!nav.apply_external("/a/b"));
        assert_eq!(nav.current(), &path(&["a", "b"]));
    }

    #[test]
    fn test_external_after_internal_does_not_echo() {
        let mut nav = NavigationState::from_location("/");
        assert_eq!(nav.navigate_to(path(&["x"])), Some("/x".to_string()));
        // popstate reporting the location we just pushed: nothing changes.
        assert!(!nav.apply_external("/x"));
    }

    #[test]
    fn test_back_forward_simulation() {
        let mut nav = NavigationState::from_location("/");
        let original = {
            assert_eq!(nav.navigate_to(path(&["x"])), Some("/x".to_string()));
            nav.current().to_vec()
        };

        // Back to root, then forward to /x again.
        assert!(nav.apply_external("/"));
        assert!(nav.current().is_empty());
        assert!(nav.apply_external("/x"));
        assert_eq!(nav.current(), &original[..]);

        // And a subsequent internal navigation to the same place stays quiet.
        assert_eq!(nav.navigate_to(path(&["x"])), None);
    }

    #[test]
    fn test_malformed_location_degrades_to_empty_path() {
        let mut nav = NavigationState::from_location("not-a-path");
        // A single segment without slashes still parses as one segment...
        assert_eq!(nav.current(), &path(&["not-a-path"]));
        // ...while slash soup degrades to the empty path.
        assert!(nav.apply_external("///"));
        assert!(nav.current().is_empty());
    }
}
