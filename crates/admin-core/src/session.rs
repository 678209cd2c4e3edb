//! Session
//!
//! The signed-in admin as an explicit value. The UI keeps it in context and
//! persists it through a `SessionStore`; nothing reads ambient storage.

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::records::AdminAccount;

/// Storage key for the role marker
pub const ROLE_KEY: &str = "userRole";
/// Storage key for the username marker
pub const USERNAME_KEY: &str = "username";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: String,
    pub username: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

/// Where the session survives page reloads
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    /// Forget everything (logout)
    fn clear(&self);
}

/// Check the login form against the admin account fetched from the server.
pub fn authenticate(account: &AdminAccount, email: &str, password: &str) -> Result<Session, AuthError> {
    if account.email != email || account.password != password {
        log::warn!("login rejected for {}", email);
        return Err(AuthError::InvalidCredentials);
    }
    let session = Session {
        role: account.roles.clone(),
        username: account.username.clone(),
    };
    if !session.is_admin() {
        log::warn!("login by {} lacks admin role ({})", email, account.roles);
        return Err(AuthError::NotAdmin);
    }
    log::info!("{} signed in", session.username);
    Ok(session)
}

/// Full login: verify, then persist. On error the store is left untouched.
pub fn sign_in(
    store: &dyn SessionStore,
    account: &AdminAccount,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let session = authenticate(account, email, password)?;
    store.save(&session);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore(RefCell<Option<Session>>);

    impl SessionStore for MemoryStore {
        fn load(&self) -> Option<Session> {
            self.0.borrow().clone()
        }
        fn save(&self, session: &Session) {
            *self.0.borrow_mut() = Some(session.clone());
        }
        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    fn admin() -> AdminAccount {
        AdminAccount {
            username: "admin".into(),
            email: "admin@exam.io".into(),
            password: "s3cret".into(),
            roles: "ADMIN".into(),
        }
    }

    #[test]
    fn matching_credentials_sign_in() {
        let store = MemoryStore::default();
        let session = sign_in(&store, &admin(), "admin@exam.io", "s3cret").unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(session.role, "ADMIN");
        assert_eq!(store.load(), Some(session));
    }

    #[test]
    fn wrong_password_stores_nothing() {
        let store = MemoryStore::default();
        let err = sign_in(&store, &admin(), "admin@exam.io", "guess").unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn non_admin_role_is_refused() {
        let mut account = admin();
        account.roles = "Editor".into();
        let err = authenticate(&account, "admin@exam.io", "s3cret").unwrap_err();
        assert_eq!(err, AuthError::NotAdmin);
    }

    #[test]
    fn logout_clears_store() {
        let store = MemoryStore::default();
        sign_in(&store, &admin(), "admin@exam.io", "s3cret").unwrap();
        store.clear();
        assert!(store.load().is_none());
    }
}
