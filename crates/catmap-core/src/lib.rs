#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::similar_names)]

pub mod access;
pub mod geo;
pub mod identity;
pub mod models;
pub mod store;

pub use crate::access::*;
pub use crate::geo::*;
pub use crate::identity::*;
pub use crate::models::*;
pub use crate::store::*;
