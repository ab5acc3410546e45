pub mod auth;
pub mod common;
pub mod predict;
pub mod user;
