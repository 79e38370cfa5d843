//! Recursive folder tree.
//!
//! Folder rows own their expand/collapse state. Children are computed from
//! the in-memory tree on first expansion; nothing is fetched.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_icons::Icon;
use studyhub_core::catalog::opens_in_new_tab;
use studyhub_core::format::format_size;
use studyhub_core::{FileKind, FolderExpansion, RepoTree, TreeEntry, TreeView};
use wasm_bindgen_futures::spawn_local;

use super::BrowserContext;
use crate::components::icons as ic;
use crate::core::repos;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/repo/repo.module.css");

/// Rows for one level of the tree, in the order given.
///
/// Returns a type-erased view: the list and its folder rows are mutually
/// recursive.
#[component]
pub fn EntryList(tree: Arc<RepoTree>, entries: TreeView) -> AnyView {
    entries
        .into_iter()
        .map(|entry| {
            if entry.is_dir() {
                view! { <FolderRow tree=tree.clone() entry=entry /> }.into_any()
            } else {
                view! { <FileRow entry=entry /> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

#[component]
fn FolderRow(tree: Arc<RepoTree>, entry: TreeEntry) -> AnyView {
    let state = RwSignal::new(FolderExpansion::collapsed());
    let expanded = Memo::new(move |_| state.with(|s| s.is_expanded()));

    let toggle = {
        let tree = tree.clone();
        let path = entry.path.clone();
        move |_| {
            state.update(|s| {
                s.toggle(&tree, &path);
            });
        }
    };

    let icon = Signal::derive(move || if expanded.get() { ic::FOLDER_OPEN } else { ic::FOLDER });
    let chevron =
        Signal::derive(move || if expanded.get() { ic::CHEVRON_DOWN } else { ic::CHEVRON_RIGHT });

    view! {
        <div class=css::folder role="treeitem" aria-expanded=move || expanded.get().to_string()>
            <button class=css::row data-folder-path=entry.path.clone() on:click=toggle>
                <span class=css::rowIcon><Icon icon=icon /></span>
                <span class=css::rowName>{entry.name.clone()}</span>
                <span class=css::chevron><Icon icon=chevron /></span>
            </button>
            {move || {
                state
                    .with(|s| s.visible_children().cloned())
                    .map(|children| {
                        view! {
                            <div class=css::children role="group">
                                <EntryList tree=tree.clone() entries=children />
                            </div>
                        }
                    })
            }}
        </div>
    }
    .into_any()
}

#[component]
fn FileRow(entry: TreeEntry) -> impl IntoView {
    let browser = use_context::<BrowserContext>().expect("BrowserContext must be provided");

    let icon = ic::for_kind(FileKind::for_file(&entry.name));
    let size = format_size(entry.size).unwrap_or_default();
    let name = entry.name.clone();
    let path = entry.path.clone();

    let on_click = move |_| open_file(&browser, &path, &name);

    view! {
        <div class=css::file role="treeitem">
            <button class=css::row data-file-path=entry.path.clone() on:click=on_click>
                <span class=css::rowIcon><Icon icon=icon /></span>
                <span class=css::rowName>{entry.name}</span>
                <span class=css::rowSize>{size}</span>
            </button>
        </div>
    }
}

/// Show a file in the code viewer, or hand binaries to the browser.
fn open_file(browser: &BrowserContext, path: &str, name: &str) {
    let source = browser.source;

    if opens_in_new_tab(name) {
        match source.raw_url(path) {
            Ok(url) => dom::open_in_new_tab(&url),
            Err(e) => tracing::warn!(path, error = %e, "cannot build raw url"),
        }
        return;
    }

    let Some(token) = browser.viewer.try_update(|v| v.open(name)) else {
        return;
    };
    let viewer = browser.viewer;
    let tree = browser.tree.clone();
    let path = path.to_string();

    spawn_local(async move {
        let result = repos::load_file(source, &tree, &path).await;
        viewer.update(|v| {
            v.resolve(token, result);
        });
    });
}
