pub mod auth;
pub mod cats;
pub mod errors;
pub mod uploads;
pub mod users;
