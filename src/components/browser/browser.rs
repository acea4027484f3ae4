//! Main browser component.
//!
//! Dispatches on the load phase and the resolved view state:
//! listing, file detail, or 404. The surrounding chrome (header, breadcrumb,
//! footer) stays mounted across navigation.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::breadcrumb::Breadcrumb;
use super::footer::Footer;
use super::header::Header;
use super::{FileDetail, FileList, NotFound};
use crate::app::{AppContext, LoadPhase};
use crate::components::icons as ic;
use crate::config::REPOSITORY_URL;
use crate::models::ViewState;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// File index browser view component.
#[component]
pub fn Browser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let view_state = Signal::derive(move || ctx.view_state());

    view! {
        <div class=css::container>
            <Header />
            <Breadcrumb />

            <main class=css::content>
                {move || match ctx.phase.get() {
                    LoadPhase::Loading => view! {
                        <div class=css::status>"Loading..."</div>
                    }
                    .into_any(),
                    LoadPhase::Failed(message) => view! {
                        <div class=format!("{} {}", css::status, css::statusError)>
                            {format!("Failed to load file index: {message}")}
                        </div>
                    }
                    .into_any(),
                    LoadPhase::Ready => match view_state.get() {
                        ViewState::Listing(items) => view! { <FileList items=items /> }.into_any(),
                        ViewState::FileDetail(file) => view! { <FileDetail file=file /> }.into_any(),
                        ViewState::NotFound => view! { <NotFound /> }.into_any(),
                    },
                }}
            </main>

            <Footer />

            <a
                class=css::repoButton
                href=REPOSITORY_URL
                target="_blank"
                rel="noopener noreferrer"
                title="Repository"
                aria-label="Project repository"
            >
                <Icon icon=ic::REPOSITORY />
            </a>
        </div>
    }
}
