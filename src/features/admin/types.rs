//! Wire types for the admin console endpoints: console login, dashboard
//! stats, and the paginated user directory.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
}

/// Console operator identity shown in the admin shell.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminInfo {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminProfileResponse {
    pub admin: AdminInfo,
}

/// Aggregates returned by `/api/admin/dashboard-stats`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u64,
    pub verified_users: u64,
    pub unverified_users: u64,
    pub suspended_users: u64,
    #[serde(default)]
    pub today_users: u64,
    #[serde(default)]
    pub growth_last_7_days: Vec<GrowthPoint>,
}

/// One day of signups; `_id` carries the `YYYY-MM-DD` bucket.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GrowthPoint {
    #[serde(rename = "_id")]
    pub date: String,
    pub count: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardStatsResponse {
    pub stats: DashboardStats,
}

/// One row of the user directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub created_at: String,
}

impl ManagedUser {
    /// Date portion of the ISO `createdAt` timestamp.
    pub fn joined_date(&self) -> &str {
        self.created_at.get(..10).unwrap_or(&self.created_at)
    }
}

/// One page of the user directory with its pagination metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersPage {
    pub users: Vec<ManagedUser>,
    pub page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total_users: u64,
}

impl UsersPage {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserDetailResponse {
    pub user: ManagedUser,
}

/// Editable fields on `/api/admin/users/:id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: String,
    pub is_email_verified: bool,
}

/// Acknowledgement for admin mutations, with the refreshed record when the
/// backend includes it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserActionResponse {
    #[serde(default)]
    pub message: String,
    pub user: Option<ManagedUser>,
}

#[cfg(test)]
mod tests {
    use super::{DashboardStatsResponse, ManagedUser, UsersPage};

    fn page(current: u32, total: u32) -> UsersPage {
        UsersPage {
            users: Vec::new(),
            page: current,
            total_pages: total,
            total_users: 0,
        }
    }

    #[test]
    fn middle_pages_allow_both_directions() {
        let page = page(2, 5);
        assert!(page.has_prev());
        assert!(page.has_next());
    }

    #[test]
    fn first_page_disables_prev() {
        let page = page(1, 5);
        assert!(!page.has_prev());
        assert!(page.has_next());
    }

    #[test]
    fn last_page_disables_next() {
        let page = page(5, 5);
        assert!(page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn empty_directory_disables_both() {
        let page = page(1, 0);
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn test_dashboard_stats_deserialization() {
        let raw = r#"{
            "stats": {
                "totalUsers": 128,
                "verifiedUsers": 100,
                "unverifiedUsers": 28,
                "suspendedUsers": 3,
                "todayUsers": 4,
                "growthLast7Days": [
                    {"_id": "2026-08-18", "count": 2},
                    {"_id": "2026-08-19", "count": 5}
                ]
            }
        }"#;

        let response: DashboardStatsResponse =
            serde_json::from_str(raw).expect("Failed to deserialize");
        assert_eq!(response.stats.total_users, 128);
        assert_eq!(response.stats.today_users, 4);
        assert_eq!(response.stats.growth_last_7_days.len(), 2);
        assert_eq!(response.stats.growth_last_7_days[0].date, "2026-08-18");
        assert_eq!(response.stats.growth_last_7_days[1].count, 5);
    }

    #[test]
    fn test_managed_user_deserialization() {
        let raw = r#"{
            "_id": "66b2",
            "name": "Grace",
            "email": "grace@example.com",
            "isEmailVerified": false,
            "isSuspended": true,
            "createdAt": "2026-08-01T12:00:00.000Z"
        }"#;

        let user: ManagedUser = serde_json::from_str(raw).expect("Failed to deserialize");
        assert_eq!(user.id, "66b2");
        assert!(user.is_suspended);
        assert!(!user.is_email_verified);
        assert_eq!(user.joined_date(), "2026-08-01");
    }
}
