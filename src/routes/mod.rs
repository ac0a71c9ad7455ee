mod admin;
mod home;
mod login;
mod not_found;
mod profile;
mod register;
mod verify_email;

pub(crate) use admin::{AdminDashboardPage, AdminLoginPage, AdminUserDetailPage, AdminUsersPage};
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use register::RegisterPage;
pub(crate) use verify_email::VerifyEmailPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths shared by links, guards, and redirects.
pub(crate) mod paths {
    use crate::app_lib::api::encode_query_component;

    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const VERIFY_EMAIL: &str = "/verify-email";
    pub const PROFILE: &str = "/profile";
    pub const ADMIN_LOGIN: &str = "/admin";
    pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
    pub const ADMIN_USERS: &str = "/admin/users";

    pub fn admin_user_detail(id: &str) -> String {
        format!("{ADMIN_USERS}/{id}")
    }

    /// Verification page with the address to verify carried in the query
    /// string, so a reload or a shared link keeps working.
    pub fn verify_email_for(email: &str) -> String {
        format!("{VERIFY_EMAIL}?email={}", encode_query_component(email))
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route path=path!("/profile") view=ProfilePage />
            <Route path=path!("/admin") view=AdminLoginPage />
            <Route path=path!("/admin/dashboard") view=AdminDashboardPage />
            <Route path=path!("/admin/users") view=AdminUsersPage />
            <Route path=path!("/admin/users/:id") view=AdminUserDetailPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

#[cfg(test)]
mod tests {
    use super::paths;

    #[test]
    fn builds_user_detail_path() {
        assert_eq!(
            paths::admin_user_detail("66b2f1a9c0de"),
            "/admin/users/66b2f1a9c0de"
        );
    }

    #[test]
    fn verify_link_encodes_email() {
        assert_eq!(
            paths::verify_email_for("ana+test@example.com"),
            "/verify-email?email=ana%2Btest%40example.com"
        );
    }
}
