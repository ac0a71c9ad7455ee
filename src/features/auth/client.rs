//! Client helpers for the member auth endpoints. These functions keep
//! endpoint paths centralized and assume the backend enforces authorization.

use crate::{
    app_lib::{AppError, Realm, SessionStore, post_json},
    features::auth::types::{
        LoginRequest, LoginResponse, MessageResponse, RegisterRequest, ResendCodeRequest,
        VerifyEmailRequest,
    },
};

/// Exchanges member credentials for a bearer token and identity.
pub async fn login(session: SessionStore, request: &LoginRequest) -> Result<LoginResponse, AppError> {
    post_json(session, Realm::User, "/api/auth/login", request).await
}

/// Creates an account; the backend mails a verification code.
pub async fn register(
    session: SessionStore,
    request: &RegisterRequest,
) -> Result<MessageResponse, AppError> {
    post_json(session, Realm::User, "/api/auth/register", request).await
}

/// Confirms the emailed verification code.
pub async fn verify_email(
    session: SessionStore,
    request: &VerifyEmailRequest,
) -> Result<MessageResponse, AppError> {
    post_json(session, Realm::User, "/api/auth/verify-email", request).await
}

/// Requests a fresh verification code for the address.
pub async fn resend_code(
    session: SessionStore,
    request: &ResendCodeRequest,
) -> Result<MessageResponse, AppError> {
    post_json(session, Realm::User, "/api/auth/resend-code", request).await
}
