//! Footer component with configurable HTML content.

use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/browser/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // The footer HTML comes from config.json. It is operator-supplied, but
    // sanitize anyway before injecting into the DOM.
    let footer_html = Signal::derive(move || ammonia::clean(&ctx.site.get().footer_or_default()));

    view! {
        <footer class=css::footer>
            <div inner_html=move || footer_html.get() />
        </footer>
    }
}
