//! Root application module.
//!
//! Contains the main App component, AppContext definition, ToastState,
//! and application-level setup logic following Leptos conventions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use studyhub_core::Navigator;
use wasm_bindgen_futures::spawn_local;

use crate::components::Shell;
use crate::config::TOAST_DURATION_MS;
use crate::utils::Theme;

// ============================================================================
// ToastState
// ============================================================================

/// Single transient message.
///
/// Showing a new message replaces the current one and restarts its timer.
/// Each message carries a sequence number so that the timer of a replaced
/// message does not hide its successor.
#[derive(Clone, Copy)]
pub struct ToastState {
    pub message: RwSignal<String>,
    pub visible: RwSignal<bool>,
    seq: RwSignal<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(String::new()),
            visible: RwSignal::new(false),
            seq: RwSignal::new(0),
        }
    }

    pub fn show(&self, message: impl Into<String>) {
        self.seq.update(|s| *s += 1);
        let current = self.seq.get_untracked();
        self.message.set(message.into());
        self.visible.set(true);

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            if this.seq.get_untracked() == current {
                this.visible.set(false);
            }
        });
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
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
/// - **Navigation**: the view-state stack; the viewer and the embed overlay
///   render from it
/// - **Toast**: transient feedback messages
/// - **Chrome**: theme and the mobile navigation menu
#[derive(Clone, Copy)]
pub struct AppContext {
    /// View-state stack.
    pub nav: RwSignal<Navigator>,

    /// Transient message.
    pub toast: ToastState,

    /// Active color theme.
    pub theme: RwSignal<Theme>,

    /// Mobile navigation menu expanded.
    pub menu_open: RwSignal<bool>,
}

impl AppContext {
    pub fn new(theme: Theme) -> Self {
        Self {
            nav: RwSignal::new(Navigator::new()),
            toast: ToastState::new(),
            theme: RwSignal::new(theme),
            menu_open: RwSignal::new(false),
        }
    }

    pub fn collapse_menu(&self) {
        if self.menu_open.get_untracked() {
            self.menu_open.set(false);
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the main Shell component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(crate::utils::theme::initial());
    provide_context(ctx);

    Effect::new(move |_| crate::utils::theme::apply(ctx.theme.get()));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="fatal">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <details>
                        <summary>"Error details"</summary>
                        <ul>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </details>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
