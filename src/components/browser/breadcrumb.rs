//! Breadcrumb navigation component.
//!
//! Shows Home plus one crumb per path segment. Each non-final crumb
//! navigates to its prefix of the current path; the final crumb is the
//! current location and is disabled.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/breadcrumb.module.css");

#[component]
pub fn Breadcrumb() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let segments = Signal::derive(move || ctx.nav.with(|nav| nav.current().to_vec()));

    view! {
        <nav class=css::breadcrumb aria-label="File path breadcrumb">
            <button
                class=css::crumb
                disabled=move || segments.with(|s| s.is_empty())
                on:click=move |_| ctx.navigate_home()
            >
                <span class=css::crumbIcon><Icon icon=ic::HOME /></span>
                "Home"
            </button>

            {move || {
                let segments = segments.get();
                let count = segments.len();
                segments
                    .into_iter()
                    .enumerate()
                    .map(|(idx, label)| {
                        let is_last = idx == count - 1;
                        view! {
                            <span class=css::divider aria-hidden="true">
                                <Icon icon=ic::CHEVRON_RIGHT />
                            </span>
                            <CrumbButton label=label prefix_len=idx + 1 is_last=is_last />
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// One clickable crumb targeting a prefix of the current path.
#[component]
fn CrumbButton(label: String, prefix_len: usize, is_last: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_click = move |_: leptos::ev::MouseEvent| {
        // The path may have changed since this crumb rendered; clamp.
        let prefix = ctx.nav.with_untracked(|nav| {
            let current = nav.current();
            current[..prefix_len.min(current.len())].to_vec()
        });
        ctx.navigate_to(prefix);
    };

    let class = if is_last {
        format!("{} {}", css::crumb, css::crumbCurrent)
    } else {
        css::crumb.to_string()
    };

    view! {
        <button
            class=class
            disabled=is_last
            aria-current=is_last.then_some("page")
            on:click=on_click
        >
            {label}
        </button>
    }
}
