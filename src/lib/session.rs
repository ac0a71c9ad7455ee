//! Persisted session state backed by browser `localStorage`. User and admin
//! credentials live in independent slots so signing in to the console never
//! touches a member session. The store is a zero-size handle passed explicitly
//! to the networking layer; nothing else in the crate reaches into storage.

use serde::{Deserialize, Serialize};

/// Storage key for the member bearer token.
pub const USER_TOKEN_KEY: &str = "userToken";
/// Storage key for the cached member identity.
pub const USER_INFO_KEY: &str = "userInfo";
/// Storage key for the admin bearer token.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";

/// Which credential slot a request or sign-in acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Realm {
    User,
    Admin,
}

impl Realm {
    /// Storage key holding this realm's bearer token.
    pub fn token_key(self) -> &'static str {
        match self {
            Realm::User => USER_TOKEN_KEY,
            Realm::Admin => ADMIN_TOKEN_KEY,
        }
    }

    /// Route to land on after this realm's session is cleared.
    pub fn login_path(self) -> &'static str {
        match self {
            Realm::User => "/login",
            Realm::Admin => "/admin",
        }
    }
}

/// Member identity cached at login so shells can render without a fetch.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// Handle over the browser's `localStorage`. Zero-size so it can live in
/// context and be copied into async calls freely.
#[derive(Clone, Copy, Default)]
pub struct SessionStore;

impl SessionStore {
    fn storage(self) -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten()
    }

    /// Bearer token for the realm, if one is stored and non-empty.
    pub fn token(self, realm: Realm) -> Option<String> {
        self.storage()?
            .get_item(realm.token_key())
            .ok()
            .flatten()
            .filter(|token| !token.trim().is_empty())
    }

    pub fn store_token(self, realm: Realm, token: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(realm.token_key(), token);
        }
    }

    pub fn user_info(self) -> Option<UserInfo> {
        let raw = self.storage()?.get_item(USER_INFO_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    pub fn store_user_info(self, info: &UserInfo) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Ok(raw) = serde_json::to_string(info) {
            let _ = storage.set_item(USER_INFO_KEY, &raw);
        }
    }

    /// Removes the realm's token, plus the cached identity for the user realm.
    pub fn clear_realm(self, realm: Realm) {
        let Some(storage) = self.storage() else {
            return;
        };
        let _ = storage.remove_item(realm.token_key());
        if realm == Realm::User {
            let _ = storage.remove_item(USER_INFO_KEY);
        }
    }
}

/// Hard navigation to the realm's login route, used after a forced sign-out
/// so no stale view state survives.
pub fn force_login_redirect(realm: Realm) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(realm.login_path());
    }
}

#[cfg(test)]
mod tests {
    use super::{Realm, UserInfo};

    #[test]
    fn realms_map_to_disjoint_token_keys() {
        assert_eq!(Realm::User.token_key(), "userToken");
        assert_eq!(Realm::Admin.token_key(), "adminToken");
        assert_ne!(Realm::User.token_key(), Realm::Admin.token_key());
    }

    #[test]
    fn realms_map_to_their_login_routes() {
        assert_eq!(Realm::User.login_path(), "/login");
        assert_eq!(Realm::Admin.login_path(), "/admin");
    }

    #[test]
    fn user_info_round_trips_with_backend_field_names() {
        let raw = r#"{"_id":"66b1","name":"Ada","email":"ada@example.com","role":"user"}"#;
        let info: UserInfo = serde_json::from_str(raw).expect("Failed to deserialize");
        assert_eq!(info.id, "66b1");
        assert_eq!(info.name, "Ada");

        let encoded = serde_json::to_string(&info).expect("Failed to serialize");
        assert!(encoded.contains("\"_id\":\"66b1\""));
    }

    #[test]
    fn user_info_tolerates_missing_role() {
        let raw = r#"{"_id":"66b1","name":"Ada","email":"ada@example.com"}"#;
        let info: UserInfo = serde_json::from_str(raw).expect("Failed to deserialize");
        assert_eq!(info.role, "");
    }
}
