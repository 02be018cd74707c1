use serde::{Deserialize, Serialize};

use catmap_core::User;

#[derive(Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) user_name: String,
    pub(crate) password: String,
}

#[derive(Serialize)]
pub(crate) struct AuthUserResponse {
    pub(crate) id: String,
    pub(crate) user_name: String,
    pub(crate) email: String,
    pub(crate) role: &'static str,
}

impl From<&User> for AuthUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            role: user.role.as_str(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct LoginResponse {
    pub(crate) message: &'static str,
    pub(crate) token: String,
    pub(crate) user: AuthUserResponse,
}
