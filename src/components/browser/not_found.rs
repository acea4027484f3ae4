//! 404 page for paths that resolve to nothing.
//!
//! Shows a short message, a quote of the day (best-effort, failures are
//! silent), and a button back to the root listing.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::QUOTE_API_URL;
use crate::models::Quote;
use crate::utils::fetch_json;

stylance::import_crate_style!(css, "src/components/browser/not_found.module.css");

#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let quote = LocalResource::new(|| async {
        fetch_json::<Quote>(QUOTE_API_URL).await.ok().map(|q| q.hitokoto)
    });

    view! {
        <div class=css::notFound>
            <h2 class=css::code>"404"</h2>
            <h3 class=css::headline>"File or folder not found"</h3>
            <p class=css::text>
                "Sorry, the file or folder you are looking for does not exist."
            </p>

            {move || {
                quote
                    .get()
                    .flatten()
                    .map(|text| view! {
                        <blockquote class=css::quote>{format!("\u{201c}{text}\u{201d}")}</blockquote>
                    })
            }}

            <button class=css::homeButton on:click=move |_| ctx.navigate_home()>
                "Back to home"
            </button>
        </div>
    }
}
