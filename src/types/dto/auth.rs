use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::dto::user::UserDto;

/// Request model for user registration
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name (required)
    pub name: Option<String>,

    /// Email address (required, unique)
    pub email: Option<String>,

    /// Plaintext password (required; stored only as a salted hash)
    pub password: Option<String>,

    /// Account role: admin, ngo or donor. Defaults to ngo.
    pub role: Option<String>,

    /// Optional free-text field
    pub cis: Option<String>,

    /// Optional biography
    pub bio: Option<String>,
}

/// Request model for login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: Option<String>,

    /// Plaintext password
    pub password: Option<String>,
}

/// Response model shared by registration and login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AuthSuccessResponse {
    /// "success"
    pub status: String,

    /// Human-readable result description
    pub message: String,

    /// The registered or authenticated user
    pub user: UserDto,
}

/// Response model for logout
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    /// "success"
    pub status: String,

    /// Human-readable result description
    pub message: String,
}

/// Response model for database initialisation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct InitDbResponse {
    /// "success"
    pub status: String,

    /// Human-readable result description
    pub message: String,
}
