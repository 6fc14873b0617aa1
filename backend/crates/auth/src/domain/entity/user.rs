//! User Entity
//!
//! A registered account: username, password hash, and the TOTP secret
//! provisioned at registration. The secret is part of the row from day one
//! and is never rotated by this service.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_object::{totp_secret::TotpSecret, user_password::UserPassword, username::Username};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier (immutable)
    pub user_id: Uuid,
    /// Username (unique, for login)
    pub username: Username,
    /// Hashed password (Argon2id PHC string)
    pub password_hash: UserPassword,
    /// TOTP secret for 2FA, generated at registration
    pub totp_secret: TotpSecret,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh identity
    pub fn new(username: Username, password_hash: UserPassword, totp_secret: TotpSecret) -> Self {
        let now = Utc::now();
        Self {
            user_id: Uuid::new_v4(),
            username,
            password_hash,
            totp_secret,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    #[test]
    fn test_new_user_gets_unique_id() {
        let raw = RawPassword::new("hunter2hunter2".to_string()).unwrap();
        let hash = UserPassword::from_raw(&raw, None).unwrap();

        let a = User::new(
            Username::new("alice").unwrap(),
            hash.clone(),
            TotpSecret::generate(),
        );
        let b = User::new(Username::new("bob").unwrap(), hash, TotpSecret::generate());

        assert_ne!(a.user_id, b.user_id);
    }
}
