//! Client helpers for the member profile endpoints.

use crate::{
    app_lib::{AppError, Realm, SessionStore, get_json, put_json},
    features::profile::types::{ProfileResponse, UpdateProfileRequest, UpdateProfileResponse},
};

/// Fetches the signed-in member's profile.
pub async fn fetch_profile(session: SessionStore) -> Result<ProfileResponse, AppError> {
    get_json(session, Realm::User, "/api/auth/profile").await
}

/// Saves the editable profile fields.
pub async fn update_profile(
    session: SessionStore,
    request: &UpdateProfileRequest,
) -> Result<UpdateProfileResponse, AppError> {
    put_json(session, Realm::User, "/api/auth/profile/update", request).await
}
