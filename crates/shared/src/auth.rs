//! Authentication types carried by access tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::UserId;

/// Role name that grants administrative rights.
pub const ADMIN_ROLE: &str = "Admin";

/// Role name assigned to regular shop staff.
pub const EMPLOYEE_ROLE: &str = "Employee";

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: Uuid,
    /// Display name of the user.
    #[serde(default)]
    pub name: String,
    /// Roles held by the user.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(user_id: Uuid, name: &str, roles: &[&str], expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            name: name.to_string(),
            roles: roles.iter().map(ToString::to_string).collect(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        UserId::from_uuid(self.sub)
    }

    /// Returns true if any role is the admin role, ignoring case.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.roles
            .iter()
            .any(|role| role.eq_ignore_ascii_case(ADMIN_ROLE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_claims_new_sets_correct_fields() {
        let user_id = Uuid::new_v4();
        let expires_at = Utc::now() + Duration::hours(1);

        let claims = Claims::new(user_id, "sara", &[EMPLOYEE_ROLE], expires_at);

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.user_id(), UserId::from_uuid(user_id));
        assert_eq!(claims.name, "sara");
        assert!(claims.iat <= Utc::now().timestamp());
        assert_eq!(claims.exp, expires_at.timestamp());
    }

    #[test]
    fn test_admin_role_is_case_insensitive() {
        let expires_at = Utc::now() + Duration::hours(1);
        let upper = Claims::new(Uuid::new_v4(), "a", &["Admin"], expires_at);
        let lower = Claims::new(Uuid::new_v4(), "b", &["admin"], expires_at);
        let staff = Claims::new(Uuid::new_v4(), "c", &[EMPLOYEE_ROLE], expires_at);
        let none = Claims::new(Uuid::new_v4(), "d", &[], expires_at);

        assert!(upper.is_admin());
        assert!(lower.is_admin());
        assert!(!staff.is_admin());
        assert!(!none.is_admin());
    }

    #[test]
    fn test_claims_without_roles_deserialize() {
        let json = format!(
            r#"{{"sub":"{}","iat":1,"exp":2}}"#,
            Uuid::nil()
        );
        let claims: Claims = serde_json::from_str(&json).unwrap();
        assert!(claims.roles.is_empty());
        assert!(!claims.is_admin());
    }
}
