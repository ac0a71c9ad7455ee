mod dashboard;
mod login;
mod users;

pub(crate) use dashboard::AdminDashboardPage;
pub(crate) use login::AdminLoginPage;
pub(crate) use users::{AdminUserDetailPage, AdminUsersPage};
