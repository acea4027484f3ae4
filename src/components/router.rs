//! Application router component.
//!
//! Synchronizes the browser location with the navigation state:
//!
//! - Internal navigation goes through [`crate::app::AppContext`] methods,
//!   which push to the history only when the location actually changes.
//! - Back/forward buttons fire `popstate`; the handler re-derives the path
//!   from the reported location and applies it without writing back, so no
//!   feedback loop is possible.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::browser::Browser;

/// Main application router.
///
/// Registers the `popstate` listener once on mount and renders the browser
/// view, which derives everything else from `(tree, path)`.
#[component]
pub fn Router() -> impl IntoView {
    #[allow(unused_variables)]
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.apply_external_location();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! { <Browser /> }
}
