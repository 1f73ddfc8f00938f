//! HTTP API handlers for adif-award

pub mod error;
pub mod health;
pub mod upload;

pub use error::ApiError;
pub use health::health_routes;
pub use upload::upload_adif;
