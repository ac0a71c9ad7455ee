//! Email verification route. The address arrives in the query string when the
//! registration flow hands over; otherwise the visitor can type it in. Codes
//! expire after ten minutes and resends are throttled, with the countdowns
//! driven by a single one-second ticker that stops when the page is disposed.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{
    client,
    otp::{OTP_TTL_SECONDS, RESEND_COOLDOWN_SECONDS, format_countdown, is_valid_code},
    state::use_auth,
    types::{ResendCodeRequest, VerifyEmailRequest},
};
use crate::routes::paths;
use gloo_timers::future::sleep;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
enum VerifyStatus {
    Idle,
    Pending,
    Success,
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
enum ResendStatus {
    Idle,
    Pending,
    Success(String),
    Error(String),
}

#[derive(Clone)]
/// Captures form input for the async action without borrowing signals.
struct VerifyInput {
    email: String,
    code: String,
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = use_auth();
    let query = use_query_map();
    let initial_email = query.get_untracked().get("email").unwrap_or_default();
    let email_locked = !initial_email.is_empty();

    let (email, set_email) = signal(initial_email.clone());
    let (code, set_code) = signal(String::new());
    let (status, set_status) = signal(VerifyStatus::Idle);
    let (resend_status, set_resend_status) = signal(ResendStatus::Idle);
    let (otp_left, set_otp_left) = signal(OTP_TTL_SECONDS);
    let (cooldown, set_cooldown) = signal(0_u32);

    // One ticker drives both countdowns; `try_update` returns `None` once the
    // page's signals are disposed, which ends the loop.
    spawn_local(async move {
        loop {
            sleep(Duration::from_secs(1)).await;
            if set_otp_left
                .try_update(|left| {
                    if *left > 0 {
                        *left -= 1;
                    }
                })
                .is_none()
            {
                break;
            }
            let _ = set_cooldown.try_update(|left| {
                if *left > 0 {
                    *left -= 1;
                }
            });
        }
    });

    let verify_action = Action::new_local(move |input: &VerifyInput| {
        let input = input.clone();
        let store = auth.store;
        async move {
            let request = VerifyEmailRequest {
                email: input.email,
                code: input.code,
            };
            client::verify_email(store, &request).await
        }
    });

    let resend_action = Action::new_local(move |email_value: &String| {
        let email_value = email_value.clone();
        let store = auth.store;
        async move {
            let request = ResendCodeRequest { email: email_value };
            client::resend_code(store, &request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(_) => set_status.set(VerifyStatus::Success),
                Err(err) => set_status.set(VerifyStatus::Error(err.user_message())),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(response) => {
                    set_cooldown.set(RESEND_COOLDOWN_SECONDS);
                    set_otp_left.set(OTP_TTL_SECONDS);
                    set_status.set(VerifyStatus::Idle);
                    let message = if response.message.is_empty() {
                        "A new code is on the way.".to_string()
                    } else {
                        response.message
                    };
                    set_resend_status.set(ResendStatus::Success(message));
                }
                Err(err) => {
                    // The backend names the wait on throttled resends.
                    if let Some(seconds) = err.retry_after() {
                        set_cooldown.set(seconds);
                    }
                    set_resend_status.set(ResendStatus::Error(err.user_message()));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let email_value = email.get_untracked().trim().to_string();
        let code_value = code.get_untracked().trim().to_string();

        if email_value.is_empty() || !email_value.contains('@') {
            set_status.set(VerifyStatus::Error(
                "Email address looks invalid.".to_string(),
            ));
            return;
        }
        if !is_valid_code(&code_value) {
            set_status.set(VerifyStatus::Error(
                "Enter the six-digit code from the email.".to_string(),
            ));
            return;
        }
        if otp_left.get_untracked() == 0 {
            set_status.set(VerifyStatus::Error(
                "That code has expired. Request a new one.".to_string(),
            ));
            return;
        }

        set_status.set(VerifyStatus::Pending);
        verify_action.dispatch(VerifyInput {
            email: email_value,
            code: code_value,
        });
    };

    let on_resend_click = Callback::new(move |_| {
        let email_value = email.get_untracked().trim().to_string();
        if email_value.is_empty() || !email_value.contains('@') {
            set_resend_status.set(ResendStatus::Error(
                "Email address looks invalid.".to_string(),
            ));
            return;
        }
        if cooldown.get_untracked() > 0 {
            return;
        }

        set_resend_status.set(ResendStatus::Pending);
        resend_action.dispatch(email_value);
    });

    let verify_disabled =
        Signal::derive(move || verify_action.pending().get() || otp_left.get() == 0);
    let resend_disabled =
        Signal::derive(move || resend_action.pending().get() || cooldown.get() > 0);

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Verify your email"
                </h1>
                {email_locked
                    .then(|| {
                        view! {
                            <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                                "We emailed a six-digit code to "
                                <span class="font-medium text-gray-900 dark:text-white">
                                    {initial_email.clone()}
                                </span>
                            </p>
                        }
                    })}
                <Show
                    when=move || status.get() != VerifyStatus::Success
                    fallback=move || {
                        view! {
                            <div class="mt-4 space-y-4">
                                <Alert
                                    kind=AlertKind::Success
                                    message="Email verified. You can sign in now.".to_string()
                                />
                                <A
                                    href=paths::LOGIN
                                    {..}
                                    class="inline-block text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-5 py-2.5 text-center dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
                                >
                                    "Continue to sign in"
                                </A>
                            </div>
                        }
                    }
                >
                    <form class="mt-6" on:submit=on_submit>
                        <Show when=move || !email_locked>
                            <div class="mb-5">
                                <label
                                    class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                                    for="email"
                                >
                                    "Email"
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                                    autocomplete="email"
                                    placeholder="name@inbox.im"
                                    on:input=move |event| set_email.set(event_target_value(&event))
                                />
                            </div>
                        </Show>
                        <div class="mb-2">
                            <label
                                class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                                for="code"
                            >
                                "Verification code"
                            </label>
                            <input
                                id="code"
                                type="text"
                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 tracking-[0.3em] font-mono dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                                inputmode="numeric"
                                maxlength="6"
                                placeholder="000000"
                                required
                                on:input=move |event| set_code.set(event_target_value(&event))
                            />
                        </div>
                        {move || {
                            let left = otp_left.get();
                            if left > 0 {
                                view! {
                                    <p class="mb-4 text-xs text-gray-500 dark:text-gray-400">
                                        "Code expires in " {format_countdown(left)}
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="mb-4">
                                        <Alert
                                            kind=AlertKind::Info
                                            message="The code has expired. Request a new one below."
                                                .to_string()
                                        />
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                        <Button button_type="submit" disabled=verify_disabled>
                            "Verify email"
                        </Button>
                        {move || {
                            verify_action
                                .pending()
                                .get()
                                .then_some(view! { <div class="mt-4"><Spinner /></div> })
                        }}
                        {move || match status.get() {
                            VerifyStatus::Error(message) => {
                                Some(
                                    view! {
                                        <div class="mt-4">
                                            <Alert kind=AlertKind::Error message=message />
                                        </div>
                                    },
                                )
                            }
                            _ => None,
                        }}
                    </form>
                    <div class="mt-8 rounded-lg border border-neutral-200 bg-white p-5 dark:border-neutral-700 dark:bg-neutral-800">
                        <h2 class="text-sm font-semibold text-gray-900 dark:text-white">
                            "Didn't get the email?"
                        </h2>
                        <p class="mt-1 text-sm text-gray-600 dark:text-gray-300">
                            "Check your spam folder first, then request a fresh code."
                        </p>
                        <div class="mt-4">
                            <Button
                                button_type="button"
                                disabled=resend_disabled
                                on_click=on_resend_click
                            >
                                {move || {
                                    let left = cooldown.get();
                                    if left > 0 {
                                        format!("Resend code in {left}s")
                                    } else {
                                        "Resend code".to_string()
                                    }
                                }}
                            </Button>
                        </div>
                        {move || {
                            resend_action
                                .pending()
                                .get()
                                .then_some(view! { <div class="mt-4"><Spinner /></div> })
                        }}
                        {move || match resend_status.get() {
                            ResendStatus::Idle | ResendStatus::Pending => None,
                            ResendStatus::Success(message) => {
                                Some(
                                    view! {
                                        <div class="mt-4">
                                            <Alert kind=AlertKind::Success message=message />
                                        </div>
                                    },
                                )
                            }
                            ResendStatus::Error(message) => {
                                Some(
                                    view! {
                                        <div class="mt-4">
                                            <Alert kind=AlertKind::Error message=message />
                                        </div>
                                    },
                                )
                            }
                        }}
                    </div>
                </Show>
            </div>
        </AppShell>
    }
}
