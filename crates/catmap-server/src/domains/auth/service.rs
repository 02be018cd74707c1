use catmap_core::{Identity, User};

use crate::app::AppState;
use crate::domains::auth::core::{passwords, tokens};
use crate::domains::errors::ServiceError;
use crate::infra::metrics;

pub struct LoginCommand {
    pub user_name: String,
    pub password: String,
}

pub struct LoginOutcome {
    pub token: String,
    pub user: User,
}

/// Unknown user and wrong password are indistinguishable to the caller.
pub async fn login(state: &AppState, cmd: LoginCommand) -> Result<LoginOutcome, ServiceError> {
    let user = match state.users.find_by_user_name(cmd.user_name.trim()).await? {
        Some(user) => user,
        None => {
            metrics::auth_login("failed");
            tracing::warn!(event = "login_failed", reason = "unknown_user", "Login rejected");
            return Err(ServiceError::Unauthorized("invalid_credentials"));
        }
    };
    if !passwords::verify_password(&user.password_hash, &cmd.password, &state.password_pepper) {
        metrics::auth_login("failed");
        tracing::warn!(
            event = "login_failed",
            reason = "bad_password",
            user_id = %user.id,
            "Login rejected"
        );
        return Err(ServiceError::Unauthorized("invalid_credentials"));
    }

    let token = match tokens::issue(&user, &state.token_secret, state.token_ttl_seconds) {
        Ok(token) => token,
        Err(_) => {
            tracing::error!(event = "token_issue_failed", user_id = %user.id);
            return Err(ServiceError::Internal("token_issue_failed"));
        }
    };
    metrics::auth_login("ok");
    tracing::info!(event = "login_ok", user_id = %user.id, "Login succeeded");
    Ok(LoginOutcome { token, user })
}

/// Resolves the caller's current record; the token may outlive the account.
pub async fn current_user(state: &AppState, identity: &Identity) -> Result<User, ServiceError> {
    match state.users.find_by_id(identity.user_id).await? {
        Some(user) => Ok(user),
        None => Err(ServiceError::NotFound),
    }
}
