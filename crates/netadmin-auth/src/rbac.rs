//! Role checks for admin-only operations.

use netadmin_core::error::AppError;
use netadmin_entity::Principal;
use netadmin_entity::user::UserRole;

/// Succeeds when the principal holds `required`.
///
/// Roles are flat: `admin` satisfies every check, `user` only checks for
/// `user`.
pub fn require_role(principal: &Principal, required: UserRole) -> Result<(), AppError> {
    if principal.role == required || principal.is_admin() {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "Role '{}' is insufficient; required: '{required}'",
            principal.role
        )))
    }
}

/// Succeeds only for administrators.
pub fn require_admin(principal: &Principal) -> Result<(), AppError> {
    require_role(principal, UserRole::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    use netadmin_core::error::ErrorKind;
    use uuid::Uuid;

    fn principal(role: UserRole) -> Principal {
        Principal {
            subject_id: Uuid::new_v4(),
            email: "someone@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_admin_passes_every_check() {
        let admin = principal(UserRole::Admin);
        assert!(require_admin(&admin).is_ok());
        assert!(require_role(&admin, UserRole::User).is_ok());
    }

    #[test]
    fn test_user_is_forbidden_from_admin() {
        let user = principal(UserRole::User);
        assert!(require_role(&user, UserRole::User).is_ok());
        assert_eq!(require_admin(&user).unwrap_err().kind, ErrorKind::Forbidden);
    }
}
