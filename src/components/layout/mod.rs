//! Layout components shared across routes.

mod admin_shell;
mod app_shell;
mod sidebar;

pub(crate) use admin_shell::AdminShell;
pub(crate) use app_shell::AppShell;
