use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Error envelope shared by every endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description of the failure
    pub error: String,
}

/// Response model for the health check endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status ("healthy")
    pub status: String,

    /// Current server time (RFC 3339)
    pub timestamp: String,
}

/// Response model for the database connectivity check
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TestDbResponse {
    /// "success" when the database answered the ping
    pub status: String,

    /// Human-readable result description
    pub message: String,
}

/// Response model for the database status endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DbStatusResponse {
    /// "success"
    pub status: String,

    /// Number of rows in the users table
    pub users: u64,

    /// Number of rows in the user_badges table
    pub badges: u64,
}
