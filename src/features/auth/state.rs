//! Auth state and context for the frontend. The provider hydrates both
//! credential slots from the session store once on mount and exposes derived
//! signals for guards, shells, and routes. Writes go through the store first
//! so a reload always agrees with what the signals said.

use crate::app_lib::session::{Realm, SessionStore, UserInfo};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub store: SessionStore,
    pub user_token: RwSignal<Option<String>>,
    pub admin_token: RwSignal<Option<String>>,
    pub user_info: RwSignal<Option<UserInfo>>,
    pub is_user_authenticated: Signal<bool>,
    pub is_admin_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds an empty context around the provided store.
    fn new(store: SessionStore) -> Self {
        let user_token = RwSignal::new(None);
        let admin_token = RwSignal::new(None);
        let user_info = RwSignal::new(None);
        let is_user_authenticated = Signal::derive(move || user_token.get().is_some());
        let is_admin_authenticated = Signal::derive(move || admin_token.get().is_some());
        Self {
            store,
            user_token,
            admin_token,
            user_info,
            is_user_authenticated,
            is_admin_authenticated,
        }
    }

    /// Persists and publishes a member session after login.
    pub fn sign_in_user(&self, token: &str, info: &UserInfo) {
        self.store.store_token(Realm::User, token);
        self.store.store_user_info(info);
        self.user_token.set(Some(token.to_string()));
        self.user_info.set(Some(info.clone()));
    }

    /// Clears the member slot, typically on logout.
    pub fn sign_out_user(&self) {
        self.store.clear_realm(Realm::User);
        self.user_token.set(None);
        self.user_info.set(None);
    }

    /// Persists and publishes an admin session after console login.
    pub fn sign_in_admin(&self, token: &str) {
        self.store.store_token(Realm::Admin, token);
        self.admin_token.set(Some(token.to_string()));
    }

    /// Clears the admin slot, typically on console logout.
    pub fn sign_out_admin(&self) {
        self.store.clear_realm(Realm::Admin);
        self.admin_token.set(None);
    }

    /// Refreshes the cached identity, e.g. after a profile update.
    pub fn update_cached_user(&self, info: &UserInfo) {
        self.store.store_user_info(info);
        self.user_info.set(Some(info.clone()));
    }
}

/// Provides auth context and hydrates both slots once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let store = SessionStore::default();
    let auth = AuthContext::new(store);
    provide_context(auth);

    auth.user_token.set(store.token(Realm::User));
    auth.admin_token.set(store.token(Realm::Admin));
    auth.user_info.set(store.user_info());

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(SessionStore::default()))
}
