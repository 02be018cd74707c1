//! GraphQL surface. Resolvers delegate to the same domain services as the
//! REST handlers, so both transports share one authorization path.

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, ErrorExtensions, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    middleware,
    response::{Html, IntoResponse},
    routing::get,
    Extension, Router,
};

use catmap_core::Identity;

use crate::app::AppState;
use crate::domains::auth::core::attach_identity;
use crate::domains::errors::ServiceError;

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type CatmapSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> CatmapSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// GET serves the GraphiQL playground, POST executes. The identity layer is
/// lenient here: anonymous queries pass through, mutations demand a caller
/// per operation.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .layer(middleware::from_fn(attach_identity))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[tracing::instrument(skip_all)]
async fn graphql_handler(
    Extension(schema): Extension<CatmapSchema>,
    identity: Option<Extension<Identity>>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Some(Extension(identity)) = identity {
        request = request.data(identity);
    }
    schema.execute(request).await.into()
}

/// Field error carrying the stable machine code in `extensions.code`.
pub(crate) fn graphql_error(err: &ServiceError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

pub(crate) fn require_caller<'ctx>(
    ctx: &async_graphql::Context<'ctx>,
) -> async_graphql::Result<&'ctx Identity> {
    ctx.data_opt::<Identity>().ok_or_else(|| {
        async_graphql::Error::new("authentication required")
            .extend_with(|_, ext| ext.set("code", "unauthorized"))
    })
}
