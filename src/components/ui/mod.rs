//! Small presentational building blocks shared across routes.

mod alert;
mod badge;
mod button;
mod loading;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use badge::{StatusBadge, VerifiedBadge};
pub(crate) use button::Button;
pub(crate) use loading::LoadingScreen;
pub(crate) use spinner::Spinner;
