//! User directory route: server-side pagination and search. The page and
//! filter live in signals; changing either refetches through one derived key
//! so the two can never disagree about what is on screen.

use crate::{
    components::{
        AdminShell, Alert, AlertKind, Button, Spinner,
        ui::{StatusBadge, VerifiedBadge},
    },
    features::{
        admin::client,
        auth::{RequireAdmin, state::use_auth},
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <AdminShell>
            <RequireAdmin>
                <UsersListContent />
            </RequireAdmin>
        </AdminShell>
    }
}

#[component]
fn UsersListContent() -> impl IntoView {
    let auth = use_auth();
    let (search_input, set_search_input) = signal(String::new());
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1_u32);

    let query_key = Signal::derive(move || (page.get(), search.get()));
    let users = LocalResource::new(move || {
        let (page_value, search_value) = query_key.get();
        let store = auth.store;
        async move { client::list_users(store, page_value, &search_value).await }
    });

    // A new filter always starts from the first page.
    let apply_search = move || {
        set_search.set(search_input.get_untracked().trim().to_string());
        set_page.set(1);
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Users"</h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "View and manage all registered accounts."
                    </p>
                </div>
            </div>

            <div class="flex flex-col sm:flex-row gap-3 sm:items-center">
                <div class="relative flex-1 max-w-md">
                    <span class="material-symbols-outlined absolute left-3 top-1/2 -translate-y-1/2 text-gray-400 text-base">
                        "search"
                    </span>
                    <input
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 pl-10 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                        placeholder="Search by name or email"
                        on:input=move |event| set_search_input.set(event_target_value(&event))
                        on:keydown=move |event| {
                            if event.key() == "Enter" {
                                event.prevent_default();
                                apply_search();
                            }
                        }
                    />
                </div>
                <Button on_click=Callback::new(move |_| apply_search())>"Search"</Button>
            </div>

            <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Name"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Email"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Status"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Verified"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Joined"
                            </th>
                            <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Actions"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || {
                            view! {
                                <tr>
                                    <td colspan="6" class="px-6 py-12 text-center">
                                        <Spinner />
                                    </td>
                                </tr>
                            }
                        }>
                            {move || match users.get() {
                                Some(Ok(page_data)) if page_data.users.is_empty() => {
                                    view! {
                                        <tr>
                                            <td
                                                colspan="6"
                                                class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400"
                                            >
                                                "No users found."
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                                Some(Ok(page_data)) => {
                                    view! {
                                        <For
                                            each=move || page_data.users.clone()
                                            key=|user| user.id.clone()
                                            children=|user| {
                                                let joined = user.joined_date().to_string();
                                                let detail_href = paths::admin_user_detail(&user.id);
                                                view! {
                                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                            {user.name}
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                                            {user.email}
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap">
                                                            <StatusBadge suspended=user.is_suspended />
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap">
                                                            <VerifiedBadge verified=user.is_email_verified />
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                                            {joined}
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                                                            <A
                                                                href=detail_href
                                                                {..}
                                                                class="text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300"
                                                            >
                                                                "View"
                                                            </A>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    }
                                        .into_any()
                                }
                                Some(Err(err)) => {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="px-6 py-4">
                                                <Alert
                                                    kind=AlertKind::Error
                                                    message=err.user_message()
                                                />
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="px-6 py-12 text-center">
                                                <Spinner />
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                            }}
                        </Suspense>
                    </tbody>
                </table>

                {move || match users.get() {
                    Some(Ok(page_data)) => {
                        let total_pages = page_data.total_pages;
                        let has_prev = page_data.has_prev();
                        let has_next = page_data.has_next();
                        let summary = format!(
                            "Page {} of {} ({} total users)",
                            page_data.page, page_data.total_pages, page_data.total_users,
                        );
                        view! {
                            <div class="flex items-center justify-between gap-4 px-6 py-3 border-t border-gray-200 dark:border-gray-700">
                                <button
                                    type="button"
                                    class="px-3 py-1.5 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700"
                                    disabled=!has_prev
                                    on:click=move |_| {
                                        set_page
                                            .update(|current| {
                                                if *current > 1 {
                                                    *current -= 1;
                                                }
                                            });
                                    }
                                >
                                    "Previous"
                                </button>
                                <p class="text-sm text-gray-500 dark:text-gray-400">{summary}</p>
                                <button
                                    type="button"
                                    class="px-3 py-1.5 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700"
                                    disabled=!has_next
                                    on:click=move |_| {
                                        set_page
                                            .update(|current| {
                                                if *current < total_pages {
                                                    *current += 1;
                                                }
                                            });
                                    }
                                >
                                    "Next"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    _ => ().into_any(),
                }}
            </div>
        </div>
    }
}
