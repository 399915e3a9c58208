use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::seller::ui::catalog::CatalogPage;
use crate::domain::users::ui::profile::ProfilePage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <CatalogPage /> }>
                <Route path=path!("/") view=CatalogPage />
                <Route path=path!("/profile") view=ProfilePage />
            </Routes>
        </Router>
    }
}
