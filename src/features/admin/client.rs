//! Client helpers for the admin console endpoints. Every call runs under
//! [`Realm::Admin`], so only the console token is ever attached.

use crate::{
    app_lib::{
        AppError, Realm, SessionStore, api::encode_query_component, get_json, post_json, put_json,
    },
    features::admin::types::{
        AdminLoginRequest, AdminLoginResponse, AdminProfileResponse, DashboardStatsResponse,
        UpdateUserRequest, UserActionResponse, UserDetailResponse, UsersPage,
    },
};

/// Fixed page size for the user directory.
pub const USERS_PAGE_SIZE: u32 = 10;

/// Exchanges console credentials for an admin bearer token.
pub async fn login(
    session: SessionStore,
    request: &AdminLoginRequest,
) -> Result<AdminLoginResponse, AppError> {
    post_json(session, Realm::Admin, "/api/admin/login", request).await
}

/// Fetches the signed-in operator's identity for the shell header.
pub async fn fetch_profile(session: SessionStore) -> Result<AdminProfileResponse, AppError> {
    get_json(session, Realm::Admin, "/api/admin/profile").await
}

/// Fetches the dashboard aggregates.
pub async fn dashboard_stats(session: SessionStore) -> Result<DashboardStatsResponse, AppError> {
    get_json(session, Realm::Admin, "/api/admin/dashboard-stats").await
}

/// Fetches one page of the user directory, optionally filtered.
pub async fn list_users(
    session: SessionStore,
    page: u32,
    search: &str,
) -> Result<UsersPage, AppError> {
    get_json(session, Realm::Admin, &users_path(page, USERS_PAGE_SIZE, search)).await
}

/// Fetches a single user by id after basic input validation.
pub async fn get_user(session: SessionStore, id: &str) -> Result<UserDetailResponse, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("User id is required.".to_string()));
    }

    get_json(session, Realm::Admin, &format!("/api/admin/users/{trimmed}")).await
}

/// Saves the editable fields of a user record.
pub async fn update_user(
    session: SessionStore,
    id: &str,
    request: &UpdateUserRequest,
) -> Result<UserActionResponse, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("User id is required.".to_string()));
    }

    put_json(
        session,
        Realm::Admin,
        &format!("/api/admin/users/{trimmed}"),
        request,
    )
    .await
}

/// Flips a user's suspension flag.
pub async fn toggle_suspension(
    session: SessionStore,
    id: &str,
) -> Result<UserActionResponse, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("User id is required.".to_string()));
    }

    put_json(
        session,
        Realm::Admin,
        &format!("/api/admin/users/{trimmed}/suspend"),
        &serde_json::json!({}),
    )
    .await
}

fn users_path(page: u32, limit: u32, search: &str) -> String {
    format!(
        "/api/admin/users?page={page}&limit={limit}&search={}",
        encode_query_component(search.trim())
    )
}

#[cfg(test)]
mod tests {
    use super::users_path;

    #[test]
    fn users_path_carries_page_limit_and_search() {
        assert_eq!(
            users_path(1, 10, ""),
            "/api/admin/users?page=1&limit=10&search="
        );
        assert_eq!(
            users_path(3, 10, "ada lovelace"),
            "/api/admin/users?page=3&limit=10&search=ada%20lovelace"
        );
    }

    #[test]
    fn users_path_trims_the_filter() {
        assert_eq!(
            users_path(1, 10, "  grace  "),
            "/api/admin/users?page=1&limit=10&search=grace"
        );
    }
}
