use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_user_authenticated;

    view! {
        <AppShell>
            <section class="max-w-screen-md mx-auto text-center py-16">
                <h1 class="mb-4 text-4xl font-extrabold tracking-tight text-gray-900 dark:text-white">
                    "Learn at your own pace"
                </h1>
                <p class="mb-8 text-lg text-gray-500 dark:text-gray-400">
                    "Neterskill keeps your account, enrollment, and profile in one place. Create an account to get started, or sign in to pick up where you left off."
                </p>
                <Show
                    when=move || is_authenticated.get()
                    fallback=move || {
                        view! {
                            <div class="flex flex-col sm:flex-row justify-center gap-4">
                                <A
                                    href=paths::REGISTER
                                    {..}
                                    class="text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-5 py-2.5 text-center dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
                                >
                                    "Get started"
                                </A>
                                <A
                                    href=paths::LOGIN
                                    {..}
                                    class="text-gray-900 bg-white border border-gray-300 hover:bg-gray-100 focus:ring-4 focus:outline-none focus:ring-gray-100 font-medium rounded-lg text-sm px-5 py-2.5 text-center dark:bg-gray-800 dark:text-white dark:border-gray-600 dark:hover:bg-gray-700 dark:focus:ring-gray-700"
                                >
                                    "Sign in"
                                </A>
                            </div>
                        }
                    }
                >
                    <A
                        href=paths::PROFILE
                        {..}
                        class="inline-block text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-5 py-2.5 text-center dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
                    >
                        "Go to your profile"
                    </A>
                </Show>
            </section>
        </AppShell>
    }
}
