//! Side navigation for the admin console.

use crate::{app_lib::build_info, features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::{use_location, use_navigate},
};

/// Admin navigation rail. Always visible on desktop; on small screens it is
/// collapsed until the shell's menu toggle sets `open`.
#[component]
pub fn Sidebar(open: ReadSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let pathname = move || location.pathname.get();
    let navigate = use_navigate();

    view! {
        <aside class=move || {
            if open.get() {
                "w-64 flex-shrink-0 flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto"
            } else {
                "w-64 flex-shrink-0 hidden md:flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto"
            }
        }>
            <nav class="flex-1 px-4 py-6 space-y-8">
                <div>
                    <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                        "Overview"
                    </h3>
                    <div class="mt-2 space-y-1">
                        <SidebarLink
                            target=paths::ADMIN_DASHBOARD.to_string()
                            icon="dashboard"
                            label="Dashboard"
                            active=move || pathname() == paths::ADMIN_DASHBOARD
                        />
                        <SidebarLink
                            target=paths::ADMIN_USERS.to_string()
                            icon="group"
                            label="Users"
                            active=move || pathname().starts_with(paths::ADMIN_USERS)
                        />
                    </div>
                </div>
            </nav>

            <div class="px-4 py-3 border-t border-gray-100 dark:border-gray-800">
                <button
                    type="button"
                    class="group flex w-full items-center px-2 py-2 text-sm font-medium rounded-md text-gray-600 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-800 hover:text-gray-900 dark:hover:text-white transition-colors"
                    on:click=move |_| {
                        auth.sign_out_admin();
                        navigate(paths::ADMIN_LOGIN, Default::default());
                    }
                >
                    <span class="material-symbols-outlined mr-3 text-xl text-gray-400 group-hover:text-gray-900 dark:group-hover:text-white transition-colors">
                        "logout"
                    </span>
                    "Sign out"
                </button>
            </div>

            // Footer / Build Info
            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    "Neterskill Console " {build_info::short_commit_hash()}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink<F>(
    target: String,
    icon: &'static str,
    label: &'static str,
    active: F,
) -> impl IntoView
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    let active = Signal::derive(active);

    view! {
        <A
            href=target
            {..}
            attr:class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:text-blue-600=move || active.get()
            class:bg-blue-50=move || active.get()
            class:dark:bg-blue-900=move || active.get()
            class:dark:text-blue-400=move || active.get()
            class:text-gray-600=move || !active.get()
            class:dark:text-gray-300=move || !active.get()
            class:hover:bg-gray-50=move || !active.get()
            class:dark:hover:bg-gray-800=move || !active.get()
            class:hover:text-gray-900=move || !active.get()
            class:dark:hover:text-white=move || !active.get()
        >
            <span
                class="material-symbols-outlined mr-3 text-xl transition-colors"
                class:text-blue-600=move || active.get()
                class:dark:text-blue-400=move || active.get()
                class:text-gray-400=move || !active.get()
                class:group-hover:text-gray-900=move || !active.get()
                class:dark:group-hover:text-white=move || !active.get()
            >
                {icon}
            </span>
            {label}
        </A>
    }
}
