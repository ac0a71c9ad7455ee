mod detail;
mod list;

pub(crate) use detail::AdminUserDetailPage;
pub(crate) use list::AdminUsersPage;
