//! Header component with site title and theme toggle.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let title = Signal::derive(move || ctx.site.get().site_title);
    let dark = ctx.dark_mode;

    view! {
        <header class=css::header>
            <h1 class=css::title>{title}</h1>
            <button
                class=css::themeToggle
                title=move || {
                    if dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
                }
                aria-label="Toggle theme"
                on:click=move |_| ctx.toggle_theme()
            >
                {move || {
                    if dark.get() {
                        view! { <Icon icon=ic::MOON /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::SUN /> }.into_any()
                    }
                }}
            </button>
        </header>
    }
}
