//! Member profile route: a read view with the account summary and an edit
//! form for the fields the backend lets members change. Saving refreshes the
//! cached identity so the header greeting stays current.

use crate::app_lib::AppError;
use crate::components::ui::VerifiedBadge;
use crate::components::{Alert, AlertKind, AppShell, Button, LoadingScreen};
use crate::features::auth::RequireUser;
use crate::features::auth::state::use_auth;
use crate::features::profile::{
    client,
    types::{Profile, UpdateProfileRequest},
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireUser>
                <ProfileContent />
            </RequireUser>
        </AppShell>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let auth = use_auth();
    let (edit_mode, set_edit_mode) = signal(false);

    // Refetches whenever the member token changes.
    let profile = LocalResource::new(move || {
        let _ = auth.user_token.get();
        let store = auth.store;
        async move { client::fetch_profile(store).await }
    });

    let on_edit = Callback::new(move |_| set_edit_mode.set(true));
    let on_cancel = Callback::new(move |_| set_edit_mode.set(false));
    let on_saved = Callback::new(move |_| {
        set_edit_mode.set(false);
        profile.refetch();
    });

    view! {
        <Suspense fallback=|| view! { <LoadingScreen message="Loading your profile..." /> }>
            {move || match profile.get() {
                Some(Ok(response)) => {
                    let user = response.user;
                    if edit_mode.get() {
                        view! { <ProfileEditor user=user on_saved=on_saved on_cancel=on_cancel /> }
                            .into_any()
                    } else {
                        view! { <ProfileView user=user on_edit=on_edit /> }.into_any()
                    }
                }
                Some(Err(err)) => {
                    view! {
                        <div class="max-w-3xl mx-auto">
                            <Alert kind=AlertKind::Error message=err.user_message() />
                        </div>
                    }
                        .into_any()
                }
                None => view! { <LoadingScreen message="Loading your profile..." /> }.into_any(),
            }}
        </Suspense>
    }
}

#[component]
fn ProfileView(user: Profile, on_edit: Callback<()>) -> impl IntoView {
    let member_since = user.member_since().to_string();
    let initial: String = user
        .name
        .chars()
        .next()
        .map(|letter| letter.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string());
    let has_image = !user.profile_image.trim().is_empty();
    let image_url = user.profile_image.clone();

    view! {
        <div class="max-w-3xl mx-auto">
            <div class="rounded-xl border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800 sm:p-8">
                <div class="flex flex-col sm:flex-row sm:items-center gap-4">
                    {if has_image {
                        view! {
                            <img
                                class="h-16 w-16 rounded-full object-cover"
                                src=image_url
                                alt="Profile"
                            />
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="h-16 w-16 rounded-full bg-blue-600 flex items-center justify-center text-2xl font-semibold text-white">
                                {initial}
                            </div>
                        }
                            .into_any()
                    }}
                    <div class="flex-1 min-w-0">
                        <h1 class="text-xl font-semibold text-gray-900 dark:text-white truncate">
                            {user.name}
                        </h1>
                        <p class="text-sm text-gray-500 dark:text-gray-400 truncate">
                            {user.email}
                        </p>
                        <div class="mt-2 flex flex-wrap items-center gap-2">
                            <span class="inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-gray-100 text-gray-600 dark:bg-gray-700 dark:text-gray-300">
                                {user.role}
                            </span>
                            <VerifiedBadge verified=user.is_email_verified />
                            <span class="text-xs text-gray-400">
                                "Member since " {member_since}
                            </span>
                        </div>
                    </div>
                    <Button on_click=Callback::new(move |_| on_edit.run(()))>
                        "Edit profile"
                    </Button>
                </div>

                <dl class="mt-8 grid grid-cols-1 gap-6 sm:grid-cols-2">
                    <ProfileField label="Phone" value=user.phone />
                    <ProfileField label="Country" value=user.country />
                    <ProfileField label="City" value=user.city />
                    <ProfileField label="Postal code" value=user.zip />
                    <div class="sm:col-span-2">
                        <ProfileField label="Address" value=user.address />
                    </div>
                    <div class="sm:col-span-2">
                        <ProfileField label="Bio" value=user.bio />
                    </div>
                </dl>
            </div>
        </div>
    }
}

#[component]
fn ProfileField(label: &'static str, value: String) -> impl IntoView {
    let display = if value.trim().is_empty() {
        "Not set".to_string()
    } else {
        value
    };

    view! {
        <div>
            <dt class="text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400">
                {label}
            </dt>
            <dd class="mt-1 text-sm text-gray-900 dark:text-white">{display}</dd>
        </div>
    }
}

#[component]
fn ProfileEditor(
    user: Profile,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let (name, set_name) = signal(user.name.clone());
    let (phone, set_phone) = signal(user.phone.clone());
    let (bio, set_bio) = signal(user.bio.clone());
    let (address, set_address) = signal(user.address.clone());
    let (country, set_country) = signal(user.country.clone());
    let (city, set_city) = signal(user.city.clone());
    let (zip, set_zip) = signal(user.zip.clone());
    let (profile_image, set_profile_image) = signal(user.profile_image.clone());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let update_action = Action::new_local(move |request: &UpdateProfileRequest| {
        let request = request.clone();
        let store = auth.store;
        async move { client::update_profile(store, &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(response) => {
                    if let Some(updated) = response.user {
                        auth.update_cached_user(&updated.as_user_info());
                    }
                    on_saved.run(());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let name_value = name.get_untracked().trim().to_string();
        if name_value.is_empty() {
            set_error.set(Some(AppError::Config("Name is required.".to_string())));
            return;
        }

        update_action.dispatch(UpdateProfileRequest {
            name: name_value,
            phone: phone.get_untracked().trim().to_string(),
            bio: bio.get_untracked(),
            address: address.get_untracked(),
            country: country.get_untracked(),
            city: city.get_untracked(),
            zip: zip.get_untracked(),
            profile_image: profile_image.get_untracked().trim().to_string(),
        });
    };

    view! {
        <div class="max-w-3xl mx-auto">
            <form
                class="rounded-xl border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800 sm:p-8"
                on:submit=on_submit
            >
                <h1 class="text-xl font-semibold text-gray-900 dark:text-white">
                    "Edit profile"
                </h1>
                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                    "Email changes go through support so the verification state stays intact."
                </p>

                <div class="mt-6 grid grid-cols-1 gap-5 sm:grid-cols-2">
                    <EditorInput
                        id="name"
                        label="Full name"
                        value=name
                        on_change=set_name
                    />
                    <EditorInput
                        id="phone"
                        label="Phone"
                        value=phone
                        on_change=set_phone
                    />
                    <EditorInput
                        id="country"
                        label="Country"
                        value=country
                        on_change=set_country
                    />
                    <EditorInput
                        id="city"
                        label="City"
                        value=city
                        on_change=set_city
                    />
                    <EditorInput
                        id="zip"
                        label="Postal code"
                        value=zip
                        on_change=set_zip
                    />
                    <EditorInput
                        id="profile_image"
                        label="Profile image URL"
                        value=profile_image
                        on_change=set_profile_image
                    />
                    <div class="sm:col-span-2">
                        <EditorInput
                            id="address"
                            label="Address"
                            value=address
                            on_change=set_address
                        />
                    </div>
                    <div class="sm:col-span-2">
                        <label
                            class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                            for="bio"
                        >
                            "Bio"
                        </label>
                        <textarea
                            id="bio"
                            rows="3"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                            prop:value=move || bio.get()
                            on:input=move |event| set_bio.set(event_target_value(&event))
                        ></textarea>
                    </div>
                </div>

                <div class="mt-6 flex flex-col-reverse sm:flex-row gap-3 sm:justify-end">
                    <button
                        type="button"
                        class="px-5 py-2.5 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 focus:ring-4 focus:ring-gray-100 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700 dark:focus:ring-gray-700"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <Button button_type="submit" disabled=update_action.pending()>
                        {move || {
                            if update_action.pending().get() { "Saving..." } else { "Save changes" }
                        }}
                    </Button>
                </div>

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

#[component]
fn EditorInput(
    id: &'static str,
    label: &'static str,
    value: ReadSignal<String>,
    on_change: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label
                class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                for=id
            >
                {label}
            </label>
            <input
                id=id
                type="text"
                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                value=move || value.get()
                on:input=move |event| on_change.set(event_target_value(&event))
            />
        </div>
    }
}
