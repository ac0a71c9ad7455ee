//! Registration route. It validates inputs locally for early feedback, sends
//! the account request, and hands the email over to the verification page so
//! the code prompt is pre-filled.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, Button, Spinner},
    features::auth::{
        client,
        state::use_auth,
        types::RegisterRequest,
        validate::{password_strength, strength_label, validate_registration},
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        let store = auth.store;
        async move { client::register(store, &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => {
                    let destination = paths::verify_email_for(email.get_untracked().trim());
                    navigate(&destination, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let name_value = name.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let phone_value = phone.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        if let Err(message) = validate_registration(
            &name_value,
            &email_value,
            &phone_value,
            &password_value,
            &confirm_value,
        ) {
            set_error.set(Some(AppError::Config(message)));
            return;
        }

        register_action.dispatch(RegisterRequest {
            name: name_value,
            email: email_value,
            phone: phone_value,
            password: password_value,
        });
    };

    view! {
        <div class="min-h-[70vh] flex items-center justify-center px-6 py-10">
            <form
                class="w-full max-w-md rounded-2xl border border-slate-200 bg-white/90 p-6 shadow-[0_20px_60px_-40px_rgba(15,23,42,0.35)] backdrop-blur sm:p-8"
                on:submit=on_submit
            >
                <div class="space-y-2">
                    <p class="text-[11px] font-semibold uppercase tracking-[0.2em] text-slate-400">
                        "Neterskill"
                    </p>
                    <h1 class="text-2xl font-semibold text-slate-900">"Create account"</h1>
                    <p class="text-sm text-slate-500">
                        "We will email you a six-digit code to verify the address."
                    </p>
                </div>

                <div class="mt-6 space-y-4">
                    <div>
                        <label class="block mb-2 text-sm font-medium text-slate-700" for="name">
                            "Full name"
                        </label>
                        <input
                            id="name"
                            type="text"
                            autofocus
                            class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                            autocomplete="name"
                            required
                            on:input=move |event| set_name.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class="block mb-2 text-sm font-medium text-slate-700" for="email">
                            "Email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                            autocomplete="email"
                            inputmode="email"
                            placeholder="name@inbox.im"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class="block mb-2 text-sm font-medium text-slate-700" for="phone">
                            "Phone"
                        </label>
                        <input
                            id="phone"
                            type="tel"
                            class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                            autocomplete="tel"
                            inputmode="tel"
                            placeholder="0712345678"
                            required
                            on:input=move |event| set_phone.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class="block mb-2 text-sm font-medium text-slate-700" for="password">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                            autocomplete="new-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                        {move || {
                            let value = password.get();
                            (!value.is_empty())
                                .then(|| {
                                    let score = password_strength(&value);
                                    let width = format!("width: {}%", u32::from(score) * 20);
                                    let bar_class = match score {
                                        0 | 1 => "h-1.5 rounded-full bg-red-500",
                                        2 | 3 => "h-1.5 rounded-full bg-yellow-400",
                                        _ => "h-1.5 rounded-full bg-emerald-500",
                                    };
                                    view! {
                                        <div class="mt-2">
                                            <div class="h-1.5 w-full rounded-full bg-slate-200">
                                                <div class=bar_class style=width></div>
                                            </div>
                                            <p class="mt-1 text-xs text-slate-500">
                                                {strength_label(score)}
                                            </p>
                                        </div>
                                    }
                                })
                        }}
                    </div>
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-slate-700"
                            for="confirm_password"
                        >
                            "Confirm password"
                        </label>
                        <input
                            id="confirm_password"
                            type="password"
                            class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                            autocomplete="new-password"
                            required
                            on:input=move |event| {
                                set_confirm_password.set(event_target_value(&event));
                            }
                        />
                    </div>

                    <Button button_type="submit" disabled=register_action.pending()>
                        "Create account"
                    </Button>
                </div>

                {move || {
                    register_action
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

                <p class="mt-6 text-sm text-slate-500">
                    "Already registered? "
                    <A
                        href=paths::LOGIN
                        {..}
                        class="font-medium text-blue-600 hover:underline"
                    >
                        "Sign in"
                    </A>
                </p>
            </form>
        </div>
    }
}
