use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use catmap_core::GeoPoint;

use crate::app::AppState;
use crate::domains::auth::service::{self as auth, LoginCommand};
use crate::domains::cats::service::{self as cats, CatDraft, CatPatch};
use crate::domains::users::service::{self as users, RegisterCommand, UpdateMeCommand};

use super::types::{
    CatObject, CreateCatInput, CreateUserInput, LoginPayload, UpdateCatInput, UpdateUserInput,
    UserObject,
};
use super::{graphql_error, require_caller};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_cat(&self, ctx: &Context<'_>, input: CreateCatInput) -> Result<CatObject> {
        let state = ctx.data::<AppState>()?;
        let identity = require_caller(ctx)?;
        let draft = CatDraft {
            name: input.name,
            weight: input.weight,
            birthdate: input.birthdate,
            filename: input.filename,
            location: input.location.map(GeoPoint::from),
            owner_id: input.owner_id,
        };
        let cat = cats::create_cat(state, identity, draft)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(CatObject::from(cat))
    }

    async fn update_cat(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        input: UpdateCatInput,
    ) -> Result<CatObject> {
        let state = ctx.data::<AppState>()?;
        let identity = require_caller(ctx)?;
        let patch = CatPatch {
            name: input.name,
            weight: input.weight,
            birthdate: input.birthdate,
            filename: input.filename,
            location: input.location.map(GeoPoint::from),
            owner_id: input.owner_id,
        };
        let cat = cats::update_cat(state, identity, id, patch)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(CatObject::from(cat))
    }

    /// Returns the last known state of the removed record.
    async fn delete_cat(&self, ctx: &Context<'_>, id: Uuid) -> Result<CatObject> {
        let state = ctx.data::<AppState>()?;
        let identity = require_caller(ctx)?;
        let cat = cats::delete_cat(state, identity, id)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(CatObject::from(cat))
    }

    async fn create_user(&self, ctx: &Context<'_>, input: CreateUserInput) -> Result<UserObject> {
        let state = ctx.data::<AppState>()?;
        let command = RegisterCommand {
            user_name: input.user_name,
            email: input.email,
            password: input.password,
        };
        let user = users::register_user(state, command)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(UserObject::from(user))
    }

    async fn update_user(&self, ctx: &Context<'_>, input: UpdateUserInput) -> Result<UserObject> {
        let state = ctx.data::<AppState>()?;
        let identity = require_caller(ctx)?;
        let command = UpdateMeCommand {
            user_name: input.user_name,
            email: input.email,
            password: input.password,
        };
        let user = users::update_me(state, identity, command)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(UserObject::from(user))
    }

    async fn delete_user(&self, ctx: &Context<'_>) -> Result<UserObject> {
        let state = ctx.data::<AppState>()?;
        let identity = require_caller(ctx)?;
        let user = users::delete_me(state, identity)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(UserObject::from(user))
    }

    async fn login(
        &self,
        ctx: &Context<'_>,
        user_name: String,
        password: String,
    ) -> Result<LoginPayload> {
        let state = ctx.data::<AppState>()?;
        let command = LoginCommand { user_name, password };
        let outcome = auth::login(state, command)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(LoginPayload {
            token: outcome.token,
            user: UserObject::from(outcome.user),
        })
    }
}
