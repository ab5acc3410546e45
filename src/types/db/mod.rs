// Database entities - SeaORM models
pub mod user;
pub mod user_badge;
