// Errors layer - Error type definitions
pub mod auth;
pub mod diag;
pub mod internal;
pub mod model;
pub mod predict;

// Re-exports for convenience
pub use auth::AuthError;
pub use diag::DiagError;
pub use internal::UserStoreError;
pub use model::{ModelLoadError, PredictionError};
pub use predict::PredictError;
