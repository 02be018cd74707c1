pub mod middleware;
pub mod passwords;
pub mod tokens;

pub use middleware::{attach_identity, require_identity};
