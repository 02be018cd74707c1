pub mod media;
pub mod metrics;
