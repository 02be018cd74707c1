pub(crate) mod routes;

pub use routes::router;
