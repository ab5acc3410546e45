use std::sync::Arc;

use poem_openapi::param::{Cookie, Path};
use poem_openapi::{payload::Json, ApiResponse, OpenApi, Tags};
use sea_orm::DatabaseConnection;

use crate::config::database;
use crate::errors::AuthError;
use crate::services::session_service::{self, SessionService};
use crate::stores::UserStore;
use crate::types::dto::auth::{
    AuthSuccessResponse, InitDbResponse, LoginRequest, LogoutResponse, RegisterRequest,
};
use crate::types::dto::user::{UserDto, UserProfileResponse};
use crate::types::internal::{NewUser, UserRole};

/// Authentication and user API endpoints
pub struct AuthApi {
    user_store: Arc<UserStore>,
    sessions: Arc<SessionService>,
    db: DatabaseConnection,
}

impl AuthApi {
    pub fn new(
        user_store: Arc<UserStore>,
        sessions: Arc<SessionService>,
        db: DatabaseConnection,
    ) -> Self {
        Self {
            user_store,
            sessions,
            db,
        }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Registration, login and session endpoints
    Authentication,
    /// User profile endpoints
    Users,
}

/// API response for registration
#[derive(ApiResponse, Debug)]
pub enum RegisterApiResponse {
    /// User created
    #[oai(status = 201)]
    Created(Json<AuthSuccessResponse>),
}

/// API response for login; carries the session cookie
#[derive(ApiResponse, Debug)]
pub enum LoginApiResponse {
    /// Authentication successful, session established
    #[oai(status = 200)]
    Ok(
        Json<AuthSuccessResponse>,
        #[oai(header = "Set-Cookie")] String,
    ),
}

/// API response for logout; expires the session cookie
#[derive(ApiResponse, Debug)]
pub enum LogoutApiResponse {
    /// Session cleared
    #[oai(status = 200)]
    Ok(Json<LogoutResponse>, #[oai(header = "Set-Cookie")] String),
}

#[OpenApi(prefix_path = "/api/auth")]
impl AuthApi {
    /// Register a new user account
    #[oai(path = "/register", method = "post", tag = "AuthTags::Authentication")]
    async fn register(
        &self,
        body: Json<RegisterRequest>,
    ) -> Result<RegisterApiResponse, AuthError> {
        let name = required_field(&body.name, "name")?;
        let email = required_field(&body.email, "email")?;
        let password = required_field(&body.password, "password")?;

        let role = match &body.role {
            None => UserRole::default(),
            Some(raw) => UserRole::parse(raw).ok_or_else(|| {
                AuthError::bad_request("Role must be one of admin, ngo or donor")
            })?,
        };

        let created = self
            .user_store
            .register(NewUser {
                name,
                email,
                password,
                role,
                cis: body.cis.clone(),
                bio: body.bio.clone(),
            })
            .await?;

        tracing::info!(user_id = created.id, "user registered");

        Ok(RegisterApiResponse::Created(Json(AuthSuccessResponse {
            status: "success".to_string(),
            message: "User registered successfully".to_string(),
            user: UserDto::from(created),
        })))
    }

    /// Login with email and password
    ///
    /// On success the response sets the session cookie. Unknown email and
    /// wrong password are deliberately indistinguishable.
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<LoginApiResponse, AuthError> {
        let email = required_field(&body.email, "email")?;
        let password = required_field(&body.password, "password")?;

        let user = self.user_store.verify_credentials(&email, &password).await?;

        let role = UserRole::parse(&user.role).unwrap_or_default();
        let session_id = self.sessions.create(user.id, &user.email, role);

        let (user, badges) = self.user_store.find_by_id(user.id).await?;

        Ok(LoginApiResponse::Ok(
            Json(AuthSuccessResponse {
                status: "success".to_string(),
                message: "Login successful".to_string(),
                user: UserDto::with_badges(user, badges),
            }),
            session_service::session_cookie(&session_id),
        ))
    }

    /// Logout and clear the session
    ///
    /// Always succeeds, whether or not a session existed.
    #[oai(path = "/logout", method = "post", tag = "AuthTags::Authentication")]
    async fn logout(
        &self,
        #[oai(name = "aidline_session")] session: Cookie<Option<String>>,
    ) -> Result<LogoutApiResponse, AuthError> {
        if let Some(session_id) = session.0 {
            self.sessions.destroy(&session_id);
        }

        Ok(LogoutApiResponse::Ok(
            Json(LogoutResponse {
                status: "success".to_string(),
                message: "Logged out successfully".to_string(),
            }),
            session_service::clear_session_cookie(),
        ))
    }

    /// Fetch a single user by id, with badges
    #[oai(path = "/user/:id", method = "get", tag = "AuthTags::Users")]
    async fn get_user(&self, id: Path<i32>) -> Result<Json<UserProfileResponse>, AuthError> {
        let (user, badges) = self.user_store.find_by_id(id.0).await?;

        Ok(Json(UserProfileResponse {
            status: "success".to_string(),
            user: UserDto::with_badges(user, badges),
        }))
    }

    /// Create tables and seed sample data
    ///
    /// Idempotent: migrations use IF NOT EXISTS and the three sample
    /// accounts are inserted only when the users table is empty.
    #[oai(path = "/init-db", method = "post", tag = "AuthTags::Authentication")]
    async fn init_db(&self) -> Result<Json<InitDbResponse>, AuthError> {
        database::migrate(&self.db).await?;

        let seeded = self.user_store.seed_sample_users().await?;
        let message = if seeded {
            "Database initialized; seeded 3 sample accounts".to_string()
        } else {
            "Database initialized; users table already populated".to_string()
        };

        Ok(Json(InitDbResponse {
            status: "success".to_string(),
            message,
        }))
    }
}

/// Reject absent or blank required fields with an explicit 400.
fn required_field(value: &Option<String>, name: &str) -> Result<String, AuthError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(AuthError::bad_request(format!(
            "Missing required field: {}",
            name
        ))),
    }
}
