//! Application root: session context first, then the router.

use crate::{features::auth::state::AuthProvider, routes::AppRoutes};
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Router>
                <AppRoutes />
            </Router>
        </AuthProvider>
    }
}
