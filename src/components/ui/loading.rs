use crate::components::ui::Spinner;
use leptos::prelude::*;

/// Full-height centered spinner for page-level resource loads.
#[component]
pub fn LoadingScreen(#[prop(optional)] message: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] gap-3">
            <Spinner />
            {message.map(|text| {
                view! { <p class="text-sm text-gray-500 dark:text-gray-400">{text}</p> }
            })}
        </div>
    }
}
