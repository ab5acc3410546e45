use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::{user, user_badge};

/// Badge owned by a user
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct BadgeDto {
    /// Badge identifier
    pub id: i32,

    /// Badge name
    pub badge_name: String,

    /// Unix timestamp the badge was earned
    pub earned_at: i64,
}

impl From<user_badge::Model> for BadgeDto {
    fn from(badge: user_badge::Model) -> Self {
        Self {
            id: badge.id,
            badge_name: badge.badge_name,
            earned_at: badge.earned_at,
        }
    }
}

/// Public view of a user record. Never carries the password hash.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    /// User identifier
    pub id: i32,

    /// Display name
    pub name: String,

    /// Email address (unique)
    pub email: String,

    /// Account role: admin, ngo or donor
    pub role: String,

    /// Optional free-text field
    pub cis: Option<String>,

    /// Optional biography
    pub bio: Option<String>,

    /// Unix timestamp of account creation
    pub created_at: i64,

    /// Unix timestamp of last update
    pub updated_at: i64,

    /// Badges earned by this user
    pub badges: Vec<BadgeDto>,
}

impl From<user::Model> for UserDto {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            cis: user.cis,
            bio: user.bio,
            created_at: user.created_at,
            updated_at: user.updated_at,
            badges: Vec::new(),
        }
    }
}

impl UserDto {
    /// Build the DTO with its badge list attached.
    pub fn with_badges(user: user::Model, badges: Vec<user_badge::Model>) -> Self {
        let mut dto = Self::from(user);
        dto.badges = badges.into_iter().map(BadgeDto::from).collect();
        dto
    }
}

/// Response model for the profile fetch endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserProfileResponse {
    /// "success"
    pub status: String,

    /// The requested user
    pub user: UserDto,
}

/// Response model for the user listing endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    /// "success"
    pub status: String,

    /// Number of users returned
    pub count: u64,

    /// All users, unpaginated
    pub users: Vec<UserDto>,
}
