pub(crate) mod client;
pub(crate) mod guards;
pub(crate) mod otp;
pub(crate) mod state;
pub(crate) mod types;
pub(crate) mod validate;

pub(crate) use guards::{RequireAdmin, RequireUser};
