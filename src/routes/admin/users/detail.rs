//! Single-user admin route: record summary, an edit form for the fields the
//! console may change, and the suspension toggle. Every mutation refetches the
//! record so the summary and the form never drift apart.

use crate::{
    components::{
        AdminShell, Alert, AlertKind, Button, Spinner,
        ui::{StatusBadge, VerifiedBadge},
    },
    features::{
        admin::{client, types::UpdateUserRequest},
        auth::{RequireAdmin, state::use_auth},
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::{hooks::use_params, params::Params};

#[derive(Params, PartialEq, Clone)]
struct UserParams {
    id: Option<String>,
}

#[derive(Clone)]
struct SaveInput {
    id: String,
    request: UpdateUserRequest,
}

#[component]
pub fn AdminUserDetailPage() -> impl IntoView {
    view! {
        <AdminShell>
            <RequireAdmin>
                <UserDetailContent />
            </RequireAdmin>
        </AdminShell>
    }
}

#[component]
fn UserDetailContent() -> impl IntoView {
    let auth = use_auth();
    let params = use_params::<UserParams>();

    let params_for_fetch = params;
    let user = LocalResource::new(move || {
        let id = params_for_fetch
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        let store = auth.store;
        async move { client::get_user(store, &id).await }
    });

    let params_for_effect = params;
    Effect::new(move |_| {
        let _ = params_for_effect.get();
        user.refetch();
    });

    let (edit_name, set_edit_name) = signal(String::new());
    let (edit_verified, set_edit_verified) = signal(false);
    let (notice, set_notice) = signal::<Option<(AlertKind, String)>>(None);

    // Reseed the form whenever a fresh record arrives.
    Effect::new(move |_| {
        if let Some(Ok(response)) = user.get() {
            set_edit_name.set(response.user.name);
            set_edit_verified.set(response.user.is_email_verified);
        }
    });

    let save_action = Action::new_local(move |input: &SaveInput| {
        let input = input.clone();
        let store = auth.store;
        async move { client::update_user(store, &input.id, &input.request).await }
    });

    let suspend_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        let store = auth.store;
        async move { client::toggle_suspension(store, &id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(response) => {
                    let message = if response.message.trim().is_empty() {
                        "User updated.".to_string()
                    } else {
                        response.message
                    };
                    set_notice.set(Some((AlertKind::Success, message)));
                    user.refetch();
                }
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = suspend_action.value().get() {
            match result {
                Ok(response) => {
                    let message = if response.message.trim().is_empty() {
                        "Suspension updated.".to_string()
                    } else {
                        response.message
                    };
                    set_notice.set(Some((AlertKind::Success, message)));
                    user.refetch();
                }
                Err(err) => set_notice.set(Some((AlertKind::Error, err.user_message()))),
            }
        }
    });

    let params_for_save = params;
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name_value = edit_name.get_untracked().trim().to_string();
        if name_value.is_empty() {
            set_notice.set(Some((AlertKind::Error, "Name is required.".to_string())));
            return;
        }

        let id = params_for_save
            .get_untracked()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        save_action.dispatch(SaveInput {
            id,
            request: UpdateUserRequest {
                name: name_value,
                is_email_verified: edit_verified.get_untracked(),
            },
        });
    };

    let params_for_suspend = params;
    let on_suspend = move |_| {
        let id = params_for_suspend
            .get_untracked()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        suspend_action.dispatch(id);
    };

    view! {
        <div class="space-y-6">
            <div>
                <A
                    href=paths::ADMIN_USERS
                    {..}
                    class="inline-flex items-center gap-1 text-sm font-medium text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300"
                >
                    <span class="material-symbols-outlined text-base">"arrow_back"</span>
                    "Back to users"
                </A>
            </div>

            {move || {
                notice
                    .get()
                    .map(|(kind, message)| view! { <Alert kind=kind message=message /> })
            }}

            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match user.get() {
                    Some(Ok(response)) => {
                        let record = response.user;
                        let joined = record.joined_date().to_string();
                        let phone = if record.phone.trim().is_empty() {
                            "Not set".to_string()
                        } else {
                            record.phone.clone()
                        };
                        let role = if record.role.trim().is_empty() {
                            "user".to_string()
                        } else {
                            record.role.clone()
                        };
                        let suspend_label = if record.is_suspended {
                            "Lift suspension"
                        } else {
                            "Suspend user"
                        };
                        let suspend_class = if record.is_suspended {
                            "px-5 py-2.5 text-sm font-medium text-white bg-emerald-600 hover:bg-emerald-700 focus:ring-4 focus:ring-emerald-300 rounded-lg disabled:opacity-50 disabled:cursor-not-allowed dark:focus:ring-emerald-800"
                        } else {
                            "px-5 py-2.5 text-sm font-medium text-white bg-red-600 hover:bg-red-700 focus:ring-4 focus:ring-red-300 rounded-lg disabled:opacity-50 disabled:cursor-not-allowed dark:focus:ring-red-800"
                        };
                        let suspend_note = if record.is_suspended {
                            "This account is suspended and cannot sign in. Lifting the suspension restores access."
                        } else {
                            "Suspending this account blocks sign-in until the suspension is lifted."
                        };
                        view! {
                            <div class="space-y-6">
                                <div class="bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg p-6 space-y-4">
                                    <div class="flex items-start justify-between gap-4">
                                        <div class="space-y-1">
                                            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                                {record.name}
                                            </h1>
                                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                                {record.email}
                                            </p>
                                        </div>
                                        <div class="flex items-center gap-2">
                                            <StatusBadge suspended=record.is_suspended />
                                            <VerifiedBadge verified=record.is_email_verified />
                                        </div>
                                    </div>
                                    <dl class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                                        <div>
                                            <dt class="text-sm font-medium text-gray-500 dark:text-gray-400">
                                                "Phone"
                                            </dt>
                                            <dd class="mt-1 text-sm text-gray-900 dark:text-white">
                                                {phone}
                                            </dd>
                                        </div>
                                        <div>
                                            <dt class="text-sm font-medium text-gray-500 dark:text-gray-400">
                                                "Role"
                                            </dt>
                                            <dd class="mt-1 text-sm text-gray-900 dark:text-white">
                                                {role}
                                            </dd>
                                        </div>
                                        <div>
                                            <dt class="text-sm font-medium text-gray-500 dark:text-gray-400">
                                                "Joined"
                                            </dt>
                                            <dd class="mt-1 text-sm text-gray-900 dark:text-white">
                                                {joined}
                                            </dd>
                                        </div>
                                    </dl>
                                </div>

                                <div class="bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg p-6">
                                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                                        "Edit user"
                                    </h2>
                                    <form on:submit=on_save class="space-y-4">
                                        <div>
                                            <label
                                                class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                                                for="edit_name"
                                            >
                                                "Name"
                                            </label>
                                            <input
                                                id="edit_name"
                                                type="text"
                                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                                                on:input=move |event| set_edit_name.set(event_target_value(&event))
                                                value=move || edit_name.get()
                                            />
                                        </div>
                                        <label class="flex items-center gap-3 text-sm font-medium text-gray-900 dark:text-white">
                                            <input
                                                type="checkbox"
                                                class="w-4 h-4 text-blue-600 bg-gray-100 border-gray-300 rounded focus:ring-blue-500 dark:focus:ring-blue-600 dark:ring-offset-gray-800 dark:bg-gray-700 dark:border-gray-600"
                                                prop:checked=move || edit_verified.get()
                                                on:change=move |event| {
                                                    set_edit_verified.set(event_target_checked(&event));
                                                }
                                            />
                                            "Email verified"
                                        </label>
                                        <div class="flex justify-end">
                                            <Button button_type="submit" disabled=save_action.pending()>
                                                {move || {
                                                    if save_action.pending().get() {
                                                        "Saving..."
                                                    } else {
                                                        "Save changes"
                                                    }
                                                }}
                                            </Button>
                                        </div>
                                    </form>
                                </div>

                                <div class="bg-white dark:bg-gray-800 shadow-sm border border-red-200 dark:border-red-900/50 rounded-lg p-6">
                                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                                        "Danger zone"
                                    </h2>
                                    <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                                        {suspend_note}
                                    </p>
                                    <div class="mt-4">
                                        <button
                                            type="button"
                                            class=suspend_class
                                            disabled=move || suspend_action.pending().get()
                                            on:click=on_suspend
                                        >
                                            {move || {
                                                if suspend_action.pending().get() {
                                                    "Working..."
                                                } else {
                                                    suspend_label
                                                }
                                            }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
