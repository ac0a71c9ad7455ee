//! Admin console frame: navigation rail, top bar with the signed-in admin,
//! and the content container. Access control lives in the route guards;
//! backend routes must enforce it as well.

use super::sidebar::Sidebar;
use crate::components::ui::Spinner;
use crate::features::{admin::client, auth::state::use_auth};
use leptos::prelude::*;

/// Wraps admin routes with the console chrome.
#[component]
pub fn AdminShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let (menu_open, set_menu_open) = signal(false);

    // Refetches whenever the admin token changes.
    let profile = LocalResource::new(move || {
        let _ = auth.admin_token.get();
        let store = auth.store;
        async move { client::fetch_profile(store).await }
    });

    view! {
        <div class="min-h-screen flex bg-gray-50 dark:bg-gray-950">
            <Sidebar open=menu_open />
            <div class="flex-1 flex flex-col min-w-0">
                <header class="h-14 flex items-center justify-between gap-4 px-4 border-b border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900">
                    <button
                        type="button"
                        class="inline-flex items-center justify-center p-2 rounded-lg text-gray-500 md:hidden hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-800"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Toggle sidebar"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <Suspense fallback=|| view! { <Spinner /> }>
                        {move || match profile.get() {
                            Some(Ok(res)) => {
                                view! {
                                    <div class="text-right">
                                        <p class="text-sm font-medium text-gray-900 dark:text-white">
                                            {res.admin.name}
                                        </p>
                                        <p class="text-xs text-gray-500 dark:text-gray-400">
                                            {res.admin.email}
                                        </p>
                                    </div>
                                }
                                    .into_any()
                            }
                            _ => ().into_any(),
                        }}
                    </Suspense>
                </header>
                <main class="flex-1 overflow-y-auto">
                    <div class="container mx-auto p-4 mt-2">{children()}</div>
                </main>
            </div>
        </div>
    }
}
