//! Application bar: back button, title, theme toggle and navigation menu.

use leptos::prelude::*;
use leptos_icons::Icon;
use studyhub_core::{NavEntry, NavTarget};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE, NAV_ENTRIES, NAV_PANEL_ID};
use crate::core::hub;
use crate::utils::{Theme, dom};

stylance::import_crate_style!(css, "src/components/appbar.module.css");

#[component]
pub fn AppBar(header_ref: NodeRef<leptos::html::Header>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let can_go_back = Memo::new(move |_| ctx.nav.with(|nav| nav.can_go_back()));
    let menu_open = ctx.menu_open;

    let theme_icon = Signal::derive(move || match ctx.theme.get() {
        Theme::Light => ic::SUN,
        Theme::Dark => ic::MOON,
    });
    let menu_icon = Signal::derive(move || if menu_open.get() { ic::CLOSE } else { ic::MENU });

    view! {
        <header
            class=css::appbar
            node_ref=header_ref
            data-expanded=move || menu_open.get().to_string()
        >
            <div class=css::bar>
                <button
                    class=css::iconButton
                    title="Back"
                    aria-label="Back"
                    disabled=move || !can_go_back.get()
                    on:click=move |_| hub::go_back(ctx)
                >
                    <Icon icon=ic::BACK />
                </button>

                <div class=css::brand>
                    <h1 class=css::title>{APP_NAME}</h1>
                    <span class=css::tagline>{APP_TAGLINE}</span>
                </div>

                <button
                    class=css::themeToggle
                    title="Toggle theme"
                    on:click=move |_| ctx.theme.update(|t| *t = t.toggled())
                >
                    <Icon icon=theme_icon />
                    <span class=css::themeLabel>{move || ctx.theme.get().label()}</span>
                </button>

                <button
                    class=css::menuToggle
                    aria-controls=NAV_PANEL_ID
                    aria-expanded=move || menu_open.get().to_string()
                    aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <Icon icon=menu_icon />
                </button>
            </div>

            <nav
                id=NAV_PANEL_ID
                class=move || {
                    if menu_open.get() {
                        format!("{} {}", css::navPanel, css::navPanelOpen)
                    } else {
                        css::navPanel.to_string()
                    }
                }
                aria-label="Modules"
            >
                {NAV_ENTRIES.iter().map(|entry| view! { <NavLink entry=*entry /> }).collect_view()}
            </nav>
        </header>
    }
}

#[component]
fn NavLink(entry: NavEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    if let NavTarget::Direct(url) = entry.target {
        return view! {
            <a class=css::navLink href=url target="_blank" rel="noopener" data-open="direct">
                {entry.label}
                <span class=css::navExternal><Icon icon=ic::EXTERNAL_LINK /></span>
            </a>
        }
        .into_any();
    }

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if dom::is_small_screen() {
            ctx.collapse_menu();
        }
        match entry.target {
            NavTarget::Page(href) => hub::load_module(ctx, href.to_string(), entry.label.to_string()),
            NavTarget::Course(code) => hub::open_course(ctx, code),
            NavTarget::Notebooks => hub::open_notebooks(ctx),
            NavTarget::UnderConstruction => hub::show_under_construction(ctx, entry.label),
            NavTarget::Direct(_) => {}
        }
    };

    let href = match entry.target {
        NavTarget::Page(href) => href,
        _ => "#",
    };

    view! {
        <a class=css::navLink href=href data-label=entry.label on:click=on_click>
            {entry.label}
        </a>
    }
    .into_any()
}
