use chrono::Utc;
use uuid::Uuid;

use catmap_core::{authorize, Action, Identity, Role, User, UserChanges};

use crate::app::AppState;
use crate::domains::auth::core::passwords;
use crate::domains::errors::ServiceError;
use crate::infra::metrics;

pub struct RegisterCommand {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

pub struct UpdateMeCommand {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct SetRoleCommand {
    pub role: Role,
}

const MIN_FIELD_LEN: usize = 3;

fn validated(value: &str, code: &'static str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.chars().count() < MIN_FIELD_LEN {
        return Err(ServiceError::BadRequest(code));
    }
    Ok(trimmed.to_string())
}

fn hashed(state: &AppState, password: &str) -> Result<String, ServiceError> {
    if password.chars().count() < MIN_FIELD_LEN {
        return Err(ServiceError::BadRequest("password_invalid"));
    }
    match passwords::hash_password(password, &state.password_pepper) {
        Ok(hash) => Ok(hash),
        Err(_) => {
            tracing::error!(event = "password_hash_failed", "Password hashing failed");
            Err(ServiceError::Internal("hash_failed"))
        }
    }
}

pub async fn register_user(state: &AppState, cmd: RegisterCommand) -> Result<User, ServiceError> {
    if !state.config.auth.registration_open {
        metrics::auth_register("closed");
        tracing::warn!(
            event = "register_rejected",
            reason = "registration_closed",
            "Registration rejected"
        );
        return Err(ServiceError::Forbidden("registration_closed"));
    }

    let user_name = validated(&cmd.user_name, "user_name_invalid")?;
    let email = validated(&cmd.email, "email_invalid")?;
    let password_hash = hashed(state, &cmd.password)?;

    // Pre-checks give precise codes; the store's unique constraints still
    // catch the racing duplicate.
    if state.users.find_by_user_name(&user_name).await?.is_some() {
        metrics::auth_register("conflict");
        return Err(ServiceError::Conflict("user_name_taken"));
    }
    if state.users.find_by_email(&email).await?.is_some() {
        metrics::auth_register("conflict");
        return Err(ServiceError::Conflict("email_taken"));
    }

    let now = Utc::now();
    let user = User {
        id: Uuid::now_v7(),
        user_name,
        email,
        password_hash,
        // Self-registration never grants Admin; roles change through the
        // admin endpoint only.
        role: Role::User,
        created_at: now,
        updated_at: now,
    };
    let user = state.users.create(user).await?;
    metrics::auth_register("ok");
    tracing::info!(event = "user_registered", user_id = %user.id, "User registered");
    Ok(user)
}

pub async fn list_users(state: &AppState) -> Result<Vec<User>, ServiceError> {
    Ok(state.users.list_all().await?)
}

pub async fn get_user(state: &AppState, id: Uuid) -> Result<User, ServiceError> {
    match state.users.find_by_id(id).await? {
        Some(user) => Ok(user),
        None => Err(ServiceError::NotFound),
    }
}

/// Self-service update. Scoped to the caller's own id, so no ownership
/// check is needed; the role column is not reachable from here.
pub async fn update_me(
    state: &AppState,
    identity: &Identity,
    cmd: UpdateMeCommand,
) -> Result<User, ServiceError> {
    let mut changes = UserChanges::default();
    if let Some(user_name) = cmd.user_name {
        changes.user_name = Some(validated(&user_name, "user_name_invalid")?);
    }
    if let Some(email) = cmd.email {
        changes.email = Some(validated(&email, "email_invalid")?);
    }
    if let Some(password) = cmd.password {
        changes.password_hash = Some(hashed(state, &password)?);
    }
    if changes.is_empty() {
        return Err(ServiceError::BadRequest("no_changes"));
    }

    match state.users.update_by_id(identity.user_id, changes).await? {
        Some(user) => {
            tracing::info!(event = "user_updated", user_id = %user.id, "User profile updated");
            Ok(user)
        }
        None => Err(ServiceError::NotFound),
    }
}

/// Returns the deleted record so the response can echo what was removed.
pub async fn delete_me(state: &AppState, identity: &Identity) -> Result<User, ServiceError> {
    match state.users.delete_by_id(identity.user_id).await? {
        Some(user) => {
            tracing::info!(event = "user_deleted", user_id = %user.id, "User deleted");
            Ok(user)
        }
        None => Err(ServiceError::NotFound),
    }
}

pub async fn set_role(
    state: &AppState,
    identity: &Identity,
    target: Uuid,
    cmd: SetRoleCommand,
) -> Result<User, ServiceError> {
    let resource = "users/role";
    if let Err(denied) = authorize(identity, None, Action::AdminOverride) {
        metrics::forbidden_access(resource);
        tracing::warn!(
            event = "forbidden",
            action = Action::AdminOverride.as_str(),
            resource = resource,
            "Access denied"
        );
        return Err(denied.into());
    }

    let changes = UserChanges {
        role: Some(cmd.role),
        ..UserChanges::default()
    };
    match state.users.update_by_id(target, changes).await? {
        Some(user) => {
            tracing::info!(
                event = "user_role_changed",
                user_id = %user.id,
                role = user.role.as_str(),
                "Role changed"
            );
            Ok(user)
        }
        None => Err(ServiceError::NotFound),
    }
}
