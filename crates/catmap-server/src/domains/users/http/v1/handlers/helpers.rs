use catmap_core::User;

use super::super::types::{PublicUserResponse, UserResponse};

pub(crate) fn public_user_response(user: User) -> PublicUserResponse {
    PublicUserResponse {
        id: user.id.to_string(),
        user_name: user.user_name,
        email: user.email,
    }
}

pub(crate) fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        user_name: user.user_name,
        email: user.email,
        role: user.role,
        created_at: user.created_at.to_rfc3339(),
        updated_at: user.updated_at.to_rfc3339(),
    }
}
