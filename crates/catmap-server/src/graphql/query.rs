use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use catmap_core::BoundingBox;

use crate::app::AppState;
use crate::domains::cats::service as cats;
use crate::domains::users::service as users;

use super::graphql_error;
use super::types::{CatObject, LocationInput, UserObject};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every cat on record. Public, like the REST list.
    async fn cats(&self, ctx: &Context<'_>) -> Result<Vec<CatObject>> {
        let state = ctx.data::<AppState>()?;
        let cats = cats::list_cats(state)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(cats.into_iter().map(CatObject::from).collect())
    }

    async fn cat_by_id(&self, ctx: &Context<'_>, id: Uuid) -> Result<CatObject> {
        let state = ctx.data::<AppState>()?;
        let cat = cats::get_cat(state, id)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(CatObject::from(cat))
    }

    async fn cats_by_owner(&self, ctx: &Context<'_>, owner_id: Uuid) -> Result<Vec<CatObject>> {
        let state = ctx.data::<AppState>()?;
        let cats = cats::list_cats_by_owner(state, owner_id)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(cats.into_iter().map(CatObject::from).collect())
    }

    /// Cats inside the box spanned by the two corners, edges inclusive.
    async fn cats_by_area(
        &self,
        ctx: &Context<'_>,
        top_right: LocationInput,
        bottom_left: LocationInput,
    ) -> Result<Vec<CatObject>> {
        let state = ctx.data::<AppState>()?;
        let area = BoundingBox::from_corners(bottom_left.into(), top_right.into());
        let cats = cats::list_cats_within(state, area)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(cats.into_iter().map(CatObject::from).collect())
    }

    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let state = ctx.data::<AppState>()?;
        let users = users::list_users(state)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(users.into_iter().map(UserObject::from).collect())
    }

    async fn user_by_id(&self, ctx: &Context<'_>, id: Uuid) -> Result<UserObject> {
        let state = ctx.data::<AppState>()?;
        let user = users::get_user(state, id)
            .await
            .map_err(|err| graphql_error(&err))?;
        Ok(UserObject::from(user))
    }
}
