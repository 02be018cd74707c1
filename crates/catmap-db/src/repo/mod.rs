macro_rules! query {
    ($sql:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut q = sqlx_core::query::query::<sqlx_postgres::Postgres>($sql);
        $(q = q.bind($arg);)*
        q
    }};
}

macro_rules! query_as {
    ($ty:ty, $sql:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut q = sqlx_core::query_as::query_as::<sqlx_postgres::Postgres, $ty>($sql);
        $(q = q.bind($arg);)*
        q
    }};
}

pub(crate) mod prelude {
    pub(crate) use crate::PgPool;
    pub(crate) use async_trait::async_trait;
    pub(crate) use catmap_core::{
        Cat, CatChanges, CatStore, StoreError, StoreResult, User, UserChanges, UserStore,
    };
    pub(crate) use chrono::Utc;
    pub(crate) use uuid::Uuid;

    pub(crate) fn map_db_err(err: sqlx_core::Error) -> StoreError {
        if let sqlx_core::Error::Database(ref db_err) = err {
            // 23505 = unique_violation
            if db_err.code().as_deref() == Some("23505") {
                return StoreError::Conflict("unique_violation");
            }
        }
        tracing::error!(event = "db_error", error = %err);
        StoreError::Backend(err.to_string())
    }
}

mod cats;
mod users;

pub use cats::PgCatStore;
pub use users::PgUserStore;
