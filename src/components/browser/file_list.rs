//! File list component for the folder listing view.
//!
//! Displays the current folder's children in document order with
//! per-row actions: download / copy URL for files, download-all for folders.
//! Size and date columns collapse into the name cell on narrow viewports.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{COPY_MESSAGE_MS, MOBILE_MEDIA_QUERY};
use crate::core::collect_download_refs;
use crate::models::{FolderNode, Node};
use crate::utils::{dom, save_url_list};

stylance::import_crate_style!(css, "src/components/browser/file_list.module.css");

/// Transient notice shown above the list (copy confirmations, empty-folder
/// download attempts). Cleared automatically after a short delay.
fn show_notice(notice: RwSignal<Option<String>>, message: String) {
    notice.set(Some(message));
    spawn_local(async move {
        TimeoutFuture::new(COPY_MESSAGE_MS).await;
        notice.set(None);
    });
}

#[component]
pub fn FileList(items: Vec<Node>) -> impl IntoView {
    let notice = RwSignal::new(None::<String>);
    let is_mobile = use_media_query(MOBILE_MEDIA_QUERY);

    let is_empty = items.is_empty();

    view! {
        <div class=css::listBlock>
            {move || {
                notice.get().map(|message| view! { <div class=css::notice>{message}</div> })
            }}

            <div class=css::list role="grid" aria-label="File list">
                <div class=css::listHeader role="row">
                    <span class=css::headerIcon></span>
                    <span class=css::headerName>"Name"</span>
                    <Show when=move || !is_mobile.get()>
                        <span class=css::headerSize>"Size"</span>
                        <span class=css::headerDate>"Date Modified"</span>
                    </Show>
                    <span class=css::headerActions>"Action"</span>
                </div>
                {items
                    .into_iter()
                    .map(|node| view! { <FileListRow node=node notice=notice /> })
                    .collect_view()}
            </div>

            {is_empty.then(|| view! { <p class=css::emptyNote>"This folder is empty."</p> })}
        </div>
    }
}

#[component]
fn FileListRow(node: Node, notice: RwSignal<Option<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_mobile = use_media_query(MOBILE_MEDIA_QUERY);

    let icon = ic::node_icon(&node);
    let name = node.name().to_string();
    let is_folder = node.is_folder();
    let (size, date) = match &node {
        Node::File(f) => (f.size.clone(), f.date.clone()),
        Node::Folder(_) => ("-".to_string(), "-".to_string()),
    };

    // Both folder and file names navigate into the entry; the resolver
    // turns the file case into its detail page.
    let nav_name = name.clone();
    let on_open = move |_: leptos::ev::MouseEvent| {
        ctx.navigate_into(&nav_name);
    };

    let name_class = if is_folder {
        format!("{} {}", css::name, css::nameFolder)
    } else {
        css::name.to_string()
    };
    let aria_label = if is_folder {
        format!("Folder: {name}")
    } else {
        format!("File: {name}")
    };

    // Separate clones per conditional block; each renders independently.
    let mobile_size = size.clone();
    let mobile_date = date.clone();

    view! {
        <div class=css::listItem role="row" aria-label=aria_label>
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>

            <div class=css::nameWrapper>
                <button class=name_class on:click=on_open>{name.clone()}</button>
                <Show when=move || is_mobile.get() && !is_folder>
                    <div class=css::mobileMeta>
                        <span>{mobile_size.clone()}</span>
                        <span>{mobile_date.clone()}</span>
                    </div>
                </Show>
            </div>

            <Show when=move || !is_mobile.get()>
                <span class=css::itemSize>{size.clone()}</span>
                <span class=css::itemDate>{date.clone()}</span>
            </Show>

            <div class=css::actions>
                {match node.clone() {
                    Node::File(file) => view! {
                        <a
                            class=css::actionButton
                            title="Download file"
                            href=file.url.clone()
                            download=""
                        >
                            <Icon icon=ic::DOWNLOAD />
                        </a>
                        <CopyUrlButton url=file.url notice=notice />
                    }
                    .into_any(),
                    Node::Folder(folder) => view! {
                        <DownloadFolderButton folder=folder notice=notice />
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

/// Copies a file's download URL to the clipboard.
#[component]
fn CopyUrlButton(url: String, notice: RwSignal<Option<String>>) -> impl IntoView {
    let on_click = move |_: leptos::ev::MouseEvent| {
        let url = url.clone();
        spawn_local(async move {
            let message = if dom::copy_to_clipboard(&url).await {
                format!("Download URL copied: {url}")
            } else {
                "Could not access the clipboard".to_string()
            };
            show_notice(notice, message);
        });
    };

    view! {
        <button class=css::actionButton title="Copy download URL" on:click=on_click>
            <Icon icon=ic::COPY_LINK />
        </button>
    }
}

/// Downloads the URL list of every file beneath a folder.
#[component]
fn DownloadFolderButton(folder: FolderNode, notice: RwSignal<Option<String>>) -> impl IntoView {
    let on_click = move |_: leptos::ev::MouseEvent| {
        let refs = collect_download_refs(&folder);
        if refs.is_empty() {
            show_notice(
                notice,
                format!("Folder '{}' contains no downloadable files", folder.name),
            );
            return;
        }
        if let Err(e) = save_url_list(&folder.name, &refs) {
            web_sys::console::error_1(&format!("Folder download failed: {e}").into());
            show_notice(notice, "Could not build the download list".to_string());
        }
    };

    view! {
        <button class=css::actionButton title="Download folder contents" on:click=on_click>
            <Icon icon=ic::DOWNLOAD />
        </button>
    }
}
