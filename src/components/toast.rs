use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/toast.module.css");

#[component]
pub fn Toast() -> impl IntoView {
    let toast = use_context::<AppContext>().expect("AppContext must be provided").toast;

    let class = move || {
        if toast.visible.get() {
            format!("{} {}", css::toast, css::visible)
        } else {
            css::toast.to_string()
        }
    };

    view! {
        <div class=class role="status" aria-live="polite" aria-atomic="true">
            {move || toast.message.get()}
        </div>
    }
}
