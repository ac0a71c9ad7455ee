use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported badge tones.
pub enum BadgeTone {
    Green,
    Red,
    Blue,
    Gray,
}

/// Small pill label for row status columns.
#[component]
pub fn Badge(tone: BadgeTone, label: &'static str) -> impl IntoView {
    let class = match tone {
        BadgeTone::Green => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-emerald-100 text-emerald-700 dark:bg-emerald-900/40 dark:text-emerald-300"
        }
        BadgeTone::Red => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-red-100 text-red-700 dark:bg-red-900/40 dark:text-red-300"
        }
        BadgeTone::Blue => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-blue-100 text-blue-700 dark:bg-blue-900/40 dark:text-blue-300"
        }
        BadgeTone::Gray => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-gray-100 text-gray-600 dark:bg-gray-700 dark:text-gray-300"
        }
    };

    view! { <span class=class>{label}</span> }
}

/// Active/Suspended pill derived from the suspension flag.
#[component]
pub fn StatusBadge(suspended: bool) -> impl IntoView {
    if suspended {
        view! { <Badge tone=BadgeTone::Red label="Suspended" /> }
    } else {
        view! { <Badge tone=BadgeTone::Green label="Active" /> }
    }
}

/// Verified/Unverified pill derived from the email flag.
#[component]
pub fn VerifiedBadge(verified: bool) -> impl IntoView {
    if verified {
        view! { <Badge tone=BadgeTone::Blue label="Verified" /> }
    } else {
        view! { <Badge tone=BadgeTone::Gray label="Unverified" /> }
    }
}
