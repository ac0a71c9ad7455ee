//! Route guards gating protected subtrees on token presence. These are
//! UX-only gates; real access control must live on the API, which also
//! invalidates stale tokens lazily via the HTTP client's 401/403 handling.

use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders children only with a member token present; otherwise navigates to
/// the sign-in page without rendering anything.
#[component]
pub fn RequireUser(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    gate(auth.is_user_authenticated, paths::LOGIN, children)
}

/// Renders children only with an admin token present; otherwise navigates to
/// the console sign-in page without rendering anything.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    gate(auth.is_admin_authenticated, paths::ADMIN_LOGIN, children)
}

fn gate(
    authenticated: Signal<bool>,
    login_path: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !authenticated.get() {
            navigate(login_path, Default::default());
        }
    });

    view! {
        <Show when=move || authenticated.get()>
            {children()}
        </Show>
    }
}
