//! Shared frontend utilities for API access, configuration, session storage,
//! errors, and build metadata.
//!
//! ## Credential handling
//!
//! The platform issues two independent bearer tokens: a member token from
//! `/api/auth/login` and an admin token from `/api/admin/login`. Each API
//! helper takes an explicit [`session::Realm`] naming the slot it runs under,
//! so a call can never pick up the wrong credential. When the backend rejects
//! a token (401 with a token-related message, or any 403), the matching slot
//! is cleared and the browser is sent back to that realm's login route.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Tokens live in `localStorage`;
//! callers must still avoid logging them.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod session;

pub(crate) use api::{get_json, post_json, put_json};
pub(crate) use errors::AppError;
pub(crate) use session::{Realm, SessionStore};
