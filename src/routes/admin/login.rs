//! Console sign-in route. Operator credentials never share a slot with member
//! credentials, so a browser can hold both sessions at once.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner},
    features::{
        admin::{client, types::AdminLoginRequest},
        auth::state::use_auth,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    // An already elevated session skips the form.
    let navigate_for_redirect = navigate.clone();
    Effect::new(move |_| {
        if auth.is_admin_authenticated.get() {
            navigate_for_redirect(paths::ADMIN_DASHBOARD, Default::default());
        }
    });

    let login_action = Action::new_local(move |request: &AdminLoginRequest| {
        let request = request.clone();
        let store = auth.store;
        async move { client::login(store, &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(response) => {
                    auth.sign_in_admin(&response.token);
                    navigate(paths::ADMIN_DASHBOARD, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Email and password are required.".to_string(),
            )));
            return;
        }

        login_action.dispatch(AdminLoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-6 py-10 dark:bg-gray-950">
            <form
                class="w-full max-w-md rounded-2xl border border-slate-200 bg-white p-6 shadow-[0_20px_60px_-40px_rgba(15,23,42,0.35)] sm:p-8 dark:border-gray-700 dark:bg-gray-900"
                on:submit=on_submit
            >
                <div class="space-y-2">
                    <p class="text-[11px] font-semibold uppercase tracking-[0.2em] text-slate-400">
                        "Neterskill"
                    </p>
                    <h1 class="text-2xl font-semibold text-slate-900 dark:text-white">
                        "Admin Console"
                    </h1>
                    <p class="text-sm text-slate-500 dark:text-gray-400">
                        "Sign in with your operator credentials."
                    </p>
                </div>

                <div class="mt-6 space-y-4">
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-slate-700 dark:text-gray-300"
                            for="admin_email"
                        >
                            "Email"
                        </label>
                        <input
                            id="admin_email"
                            type="email"
                            autofocus
                            class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200 dark:border-gray-600 dark:bg-gray-800 dark:text-white"
                            autocomplete="email"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-slate-700 dark:text-gray-300"
                            for="admin_password"
                        >
                            "Password"
                        </label>
                        <input
                            id="admin_password"
                            type="password"
                            class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200 dark:border-gray-600 dark:bg-gray-800 dark:text-white"
                            autocomplete="current-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>

                    <Button button_type="submit" disabled=login_action.pending()>
                        "Sign in"
                    </Button>
                </div>

                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.user_message() />
                                </div>
                            }
                        })
                }}
            </form>
        </div>
    }
}
