use uuid::Uuid;

use crate::identity::Identity;
use crate::models::Role;

/// Action being attempted against a cat record.
///
/// `AdminOverride` is the privileged variant of update/delete exposed on the
/// admin endpoints; it never falls back to ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    AdminOverride,
}

impl Action {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::AdminOverride => "admin_override",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenied {
    /// Caller is authenticated but does not own the resource.
    NotOwner,
    /// Action is reserved for the Admin role.
    AdminOnly,
}

impl AccessDenied {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotOwner => "not_owner",
            Self::AdminOnly => "admin_only",
        }
    }
}

impl std::fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::error::Error for AccessDenied {}

/// Decides whether `caller` may perform `action` on a resource owned by
/// `resource_owner` (`None` when no specific resource is targeted, e.g. the
/// admin endpoints gate before loading anything).
///
/// Rules in priority order: Admin is permitted unconditionally; Create is
/// permitted for any authenticated caller; Read/Update/Delete require
/// ownership, compared by stable user id only; AdminOverride is denied to
/// everyone else. Callers must check existence before invoking this so a
/// missing resource surfaces as not-found, never as a denial.
pub fn authorize(
    caller: &Identity,
    resource_owner: Option<Uuid>,
    action: Action,
) -> Result<(), AccessDenied> {
    match (caller.role, action) {
        (Role::Admin, _) => Ok(()),
        (Role::User, Action::Create) => Ok(()),
        (Role::User, Action::Read | Action::Update | Action::Delete) => {
            if resource_owner == Some(caller.user_id) {
                Ok(())
            } else {
                Err(AccessDenied::NotOwner)
            }
        }
        (Role::User, Action::AdminOverride) => Err(AccessDenied::AdminOnly),
    }
}

#[cfg(test)]
mod tests {
    use super::{authorize, AccessDenied, Action};
    use crate::identity::Identity;
    use crate::models::Role;
    use uuid::Uuid;

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: Uuid::now_v7(),
            user_name: "test".to_string(),
            role,
        }
    }

    const ALL_ACTIONS: [Action; 5] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
        Action::AdminOverride,
    ];

    #[test]
    fn admin_is_permitted_every_action() {
        let admin = identity(Role::Admin);
        let other_owner = Uuid::now_v7();
        for action in ALL_ACTIONS {
            assert!(authorize(&admin, Some(other_owner), action).is_ok());
            assert!(authorize(&admin, None, action).is_ok());
        }
    }

    #[test]
    fn owner_may_read_update_delete() {
        let caller = identity(Role::User);
        for action in [Action::Read, Action::Update, Action::Delete] {
            assert!(authorize(&caller, Some(caller.user_id), action).is_ok());
        }
    }

    #[test]
    fn non_owner_is_denied() {
        let caller = identity(Role::User);
        let other_owner = Uuid::now_v7();
        for action in [Action::Read, Action::Update, Action::Delete] {
            assert_eq!(
                authorize(&caller, Some(other_owner), action),
                Err(AccessDenied::NotOwner)
            );
        }
    }

    #[test]
    fn create_is_open_to_any_authenticated_caller() {
        let caller = identity(Role::User);
        assert!(authorize(&caller, None, Action::Create).is_ok());
    }

    #[test]
    fn admin_override_requires_admin_role() {
        let caller = identity(Role::User);
        assert_eq!(
            authorize(&caller, Some(caller.user_id), Action::AdminOverride),
            Err(AccessDenied::AdminOnly)
        );
        assert_eq!(
            authorize(&caller, None, Action::AdminOverride),
            Err(AccessDenied::AdminOnly)
        );
    }

    #[test]
    fn missing_owner_denies_scoped_actions() {
        let caller = identity(Role::User);
        assert_eq!(
            authorize(&caller, None, Action::Update),
            Err(AccessDenied::NotOwner)
        );
    }

    #[test]
    fn denial_codes_are_stable() {
        assert_eq!(AccessDenied::NotOwner.code(), "not_owner");
        assert_eq!(AccessDenied::AdminOnly.code(), "admin_only");
    }
}
