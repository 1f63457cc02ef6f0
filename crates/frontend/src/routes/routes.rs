use crate::domain::categories::ui::CategoriesPage;
use crate::domain::exhibitions::ui::ExhibitionsPage;
use crate::domain::industries::ui::IndustriesPage;
use crate::domain::products::ui::ProductsPage;
use crate::domain::slider_images::ui::SliderImagesPage;
use crate::domain::team_members::ui::TeamMembersPage;
use crate::layout::navbar::Navbar;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

/// Reset the scroll position when the route changes.
#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();
    Effect::new(move |_| {
        location.pathname.track();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="content">
                <ScrollToTop />
                <Routes fallback=|| view! { <p class="content__empty">"Page not found"</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/products" /> } />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/categories") view=CategoriesPage />
                    <Route path=path!("/industries") view=IndustriesPage />
                    <Route path=path!("/exhibition") view=ExhibitionsPage />
                    <Route path=path!("/slider-images") view=SliderImagesPage />
                    <Route path=path!("/team") view=TeamMembersPage />
                </Routes>
            </main>
        </Router>
    }
}
