//! Domain-level frontend features (auth, profile, admin) and their shared
//! logic. Routes import these modules to keep view code focused while keeping
//! credential and API handling in dedicated feature areas.

pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod profile;
