//! File detail page.
//!
//! Shown when the current path resolves to a single file: name, metadata
//! labels, optional description, and the download / copy-URL actions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::config::COPY_MESSAGE_MS;
use crate::models::FileNode;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/browser/detail.module.css");

#[component]
pub fn FileDetail(file: FileNode) -> impl IntoView {
    let copy_message = RwSignal::new(None::<String>);

    let icon = ic::file_icon(&file.name);
    let url = file.url.clone();

    let on_copy = move |_: leptos::ev::MouseEvent| {
        let url = url.clone();
        spawn_local(async move {
            let message = if dom::copy_to_clipboard(&url).await {
                format!("Download URL copied to clipboard: {url}")
            } else {
                "Could not access the clipboard".to_string()
            };
            copy_message.set(Some(message));
            TimeoutFuture::new(COPY_MESSAGE_MS).await;
            copy_message.set(None);
        });
    };

    view! {
        <article class=css::detail>
            <div class=css::heading>
                <span class=css::fileIcon aria-hidden="true"><Icon icon=icon /></span>
                <h2 class=css::fileName>{file.name.clone()}</h2>
            </div>

            <dl class=css::metaGrid>
                <dt>"Size"</dt>
                <dd>{file.size.clone()}</dd>
                <dt>"Date Modified"</dt>
                <dd>{file.date.clone()}</dd>
                {file
                    .description
                    .clone()
                    .map(|desc| view! {
                        <dt>"Description"</dt>
                        <dd>{desc}</dd>
                    })}
            </dl>

            {move || {
                copy_message.get().map(|message| view! { <div class=css::copyNotice>{message}</div> })
            }}

            <div class=css::actions>
                <a class=css::downloadButton href=file.url.clone() download="">
                    <Icon icon=ic::DOWNLOAD />
                    "Download"
                </a>
                <button class=css::copyButton on:click=on_copy>
                    <Icon icon=ic::COPY_LINK />
                    "Copy Download URL"
                </button>
            </div>
        </article>
    }
}
