//! Console dashboard: headline counts plus the last week of signups. The
//! backend computes every aggregate; this page only renders and refreshes.

use crate::{
    components::{AdminShell, Alert, AlertKind, LoadingScreen},
    features::{
        admin::{client, types::DashboardStats},
        auth::{RequireAdmin, state::use_auth},
    },
};
use leptos::prelude::*;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <AdminShell>
            <RequireAdmin>
                <DashboardContent />
            </RequireAdmin>
        </AdminShell>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = use_auth();

    let stats = LocalResource::new(move || {
        let _ = auth.admin_token.get();
        let store = auth.store;
        async move { client::dashboard_stats(store).await }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Dashboard"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Registration and verification totals across the platform."
                    </p>
                </div>
                <button
                    type="button"
                    class="inline-flex items-center gap-2 px-3 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700"
                    on:click=move |_| stats.refetch()
                >
                    <span class="material-symbols-outlined text-base">"refresh"</span>
                    "Refresh"
                </button>
            </div>

            <Suspense fallback=|| view! { <LoadingScreen message="Loading stats..." /> }>
                {move || match stats.get() {
                    Some(Ok(response)) => render_stats_grid(response.stats).into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                            .into_any()
                    }
                    None => view! { <LoadingScreen message="Loading stats..." /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

fn render_stats_grid(stats: DashboardStats) -> impl IntoView {
    let has_growth = !stats.growth_last_7_days.is_empty();
    let growth_rows = stats
        .growth_last_7_days
        .iter()
        .map(|point| {
            view! {
                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                    <td class="px-6 py-3 whitespace-nowrap text-sm text-gray-900 dark:text-white">
                        {point.date.clone()}
                    </td>
                    <td class="px-6 py-3 whitespace-nowrap text-sm text-right text-gray-900 dark:text-white">
                        {point.count}
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 xl:grid-cols-5">
                <StatCard label="Total users" icon="group" value=stats.total_users />
                <StatCard label="Verified" icon="verified" value=stats.verified_users />
                <StatCard label="Unverified" icon="mark_email_unread" value=stats.unverified_users />
                <StatCard label="Suspended" icon="block" value=stats.suspended_users />
                <StatCard label="New today" icon="today" value=stats.today_users />
            </div>

            <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <div class="px-6 py-4 border-b border-gray-100 dark:border-gray-700">
                    <h2 class="text-sm font-semibold text-gray-900 dark:text-white">
                        "Signups, last seven days"
                    </h2>
                </div>
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th
                                scope="col"
                                class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider"
                            >
                                "Date"
                            </th>
                            <th
                                scope="col"
                                class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider"
                            >
                                "Signups"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        {growth_rows}
                        {(!has_growth)
                            .then(|| {
                                view! {
                                    <tr>
                                        <td
                                            colspan="2"
                                            class="px-6 py-8 text-center text-sm text-gray-500 dark:text-gray-400"
                                        >
                                            "No signups recorded this week."
                                        </td>
                                    </tr>
                                }
                            })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, icon: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm dark:border-gray-700 dark:bg-gray-800">
            <div class="flex items-center justify-between">
                <p class="text-sm text-gray-500 dark:text-gray-400">{label}</p>
                <span class="material-symbols-outlined text-gray-400">{icon}</span>
            </div>
            <p class="mt-2 text-3xl font-semibold text-gray-900 dark:text-white">{value}</p>
        </div>
    }
}
