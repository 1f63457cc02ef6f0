//! Navigation shell: fixed sidebar on desktop, drawer behind a top bar on
//! mobile. Purely presentational.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

// (route, label, icon)
const NAV_ITEMS: [(&str, &str, &str); 6] = [
    ("/products", "Products", "package"),
    ("/categories", "Categories", "tag"),
    ("/industries", "Industries", "factory"),
    ("/exhibition", "Exhibition", "calendar"),
    ("/slider-images", "Slider Images", "image"),
    ("/team", "Team Members", "users"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        // mobile top bar; hidden on desktop by the stylesheet
        <div class="topbar">
            <button class="topbar__menu" on:click=move |_| set_open.set(true)>
                {icon("menu")}
            </button>
            <span class="topbar__brand">"Catalog Admin"</span>
        </div>

        <Show when=move || open.get()>
            <div class="sidebar-overlay" on:click=move |_| set_open.set(false)></div>
        </Show>

        <aside class="sidebar" class:sidebar--open=move || open.get()>
            <div class="sidebar__header">
                <span class="sidebar__brand">"Catalog Admin"</span>
                <button class="sidebar__close" on:click=move |_| set_open.set(false)>
                    {icon("x")}
                </button>
            </div>

            // navigating away also closes the drawer; link clicks bubble here
            <nav class="sidebar__nav" on:click=move |_| set_open.set(false)>
                {NAV_ITEMS
                    .iter()
                    .map(|(route, label, icon_name)| {
                        view! {
                            <A href=*route attr:class="sidebar__link">
                                {icon(icon_name)}
                                <span>{*label}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
