// API layer - HTTP endpoints
pub mod auth;
pub mod diag;
pub mod health;
pub mod predict;

pub use auth::AuthApi;
pub use diag::DiagApi;
pub use health::HealthApi;
pub use predict::PredictApi;
