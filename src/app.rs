//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Router;
use crate::config::{CONFIG_URL, FILES_URL, THEME_STORAGE_KEY};
use crate::core::NavigationState;
use crate::models::{Node, SiteConfig, ViewState};
use crate::utils::{dom, fetch_json};

// ============================================================================
// Load Phase
// ============================================================================

/// Lifecycle of the one-time tree document fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadPhase {
    /// Fetch in flight; the tree is the empty placeholder.
    Loading,
    /// Tree loaded and installed.
    Ready,
    /// Fetch or parse failed. The tree stays empty: everything still
    /// resolves (root listing is empty, anything else is not found).
    Failed(String),
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Navigation**: [`NavigationState`] is the single owner of the current
///   path. All components express navigation intents through the methods
///   below; none touch the browser history directly.
/// - **Tree**: read-only after load; a reload replaces it wholesale.
/// - **Site config / theme**: presentation state fetched or persisted
///   independently of the tree.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current navigation path and location-sync guard.
    pub nav: RwSignal<NavigationState>,
    /// The file index tree. Empty until loaded (or on load failure).
    pub tree: RwSignal<Vec<Node>>,
    /// Tree fetch lifecycle.
    pub phase: RwSignal<LoadPhase>,
    /// Runtime site configuration.
    pub site: RwSignal<SiteConfig>,
    /// Dark mode flag, persisted in localStorage.
    pub dark_mode: RwSignal<bool>,
}

impl AppContext {
    /// Creates the application context from the environment's initial state.
    ///
    /// The navigation path is derived once from the starting location; the
    /// theme preference is restored from localStorage.
    pub fn new() -> Self {
        let nav = NavigationState::from_location(&dom::pathname());
        let dark = dom::local_storage()
            .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
            .is_some_and(|v| v == "dark");

        Self {
            nav: RwSignal::new(nav),
            tree: RwSignal::new(Vec::new()),
            phase: RwSignal::new(LoadPhase::Loading),
            site: RwSignal::new(SiteConfig::default()),
            dark_mode: RwSignal::new(dark),
        }
    }

    /// Resolve the current path against the tree (reactive).
    pub fn view_state(&self) -> ViewState {
        self.tree
            .with(|tree| self.nav.with(|nav| crate::core::resolve(tree, nav.current())))
    }

    /// Replace the current path and sync the browser location.
    pub fn navigate_to(&self, path: Vec<String>) {
        let mut write = None;
        self.nav.update(|nav| write = nav.navigate_to(path));
        if let Some(location) = write {
            dom::push_pathname(&location);
        }
    }

    /// Descend into a child of the current path.
    pub fn navigate_into(&self, segment: &str) {
        let mut write = None;
        self.nav.update(|nav| write = nav.navigate_into(segment));
        if let Some(location) = write {
            dom::push_pathname(&location);
        }
    }

    /// Return to the root listing.
    pub fn navigate_home(&self) {
        self.navigate_to(Vec::new());
    }

    /// Apply a location change reported by the environment (back/forward).
    ///
    /// Never writes back to the history; see [`NavigationState::apply_external`].
    pub fn apply_external_location(&self) {
        let pathname = dom::pathname();
        self.nav.update(|nav| {
            nav.apply_external(&pathname);
        });
    }

    /// Toggle between light and dark mode.
    pub fn toggle_theme(&self) {
        self.dark_mode.update(|d| *d = !*d);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Data Loading
// ============================================================================

/// Fetch the tree document and install it.
async fn load_tree(ctx: AppContext) {
    match fetch_json::<Vec<Node>>(FILES_URL).await {
        Ok(tree) => {
            ctx.tree.set(tree);
            ctx.phase.set(LoadPhase::Ready);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load {}: {}", FILES_URL, e).into());
            ctx.phase.set(LoadPhase::Failed(e.to_string()));
        }
    }
}

/// Fetch the site configuration, keeping defaults on failure.
async fn load_site_config(ctx: AppContext) {
    match fetch_json::<SiteConfig>(CONFIG_URL).await {
        Ok(config) => ctx.site.set(config),
        Err(e) => {
            web_sys::console::warn_1(&format!("Failed to load {}: {}", CONFIG_URL, e).into());
        }
    }
}

// ============================================================================
// App Component
// ============================================================================

/// Root application component.
///
/// Creates and provides the global AppContext, kicks off the one-time data
/// fetches, and wires the document-level effects (title, favicon, theme).
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    spawn_local(load_tree(ctx));
    spawn_local(load_site_config(ctx));

    // Keep document title and favicon in sync with the site config.
    Effect::new(move |_| {
        let site = ctx.site.get();
        dom::set_document_title(&site.site_title);
        dom::set_favicon(&site.favicon);
    });

    // Apply and persist the theme preference.
    Effect::new(move |_| {
        let dark = ctx.dark_mode.get();
        dom::set_theme_attribute(dark);
        if let Some(storage) = dom::local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, if dark { "dark" } else { "light" });
        }
    });

    view! { <Router /> }
}
