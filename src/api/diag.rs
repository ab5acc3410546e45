use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::errors::DiagError;
use crate::stores::UserStore;
use crate::types::dto::common::{DbStatusResponse, TestDbResponse};
use crate::types::dto::user::{UserDto, UserListResponse};

/// Diagnostic and listing API. Deliberately unguarded, matching the
/// original surface.
pub struct DiagApi {
    user_store: Arc<UserStore>,
}

impl DiagApi {
    pub fn new(user_store: Arc<UserStore>) -> Self {
        Self { user_store }
    }
}

/// API tags for diagnostic endpoints
#[derive(Tags)]
enum DiagTags {
    /// Database diagnostics and listings
    Diagnostics,
}

#[OpenApi]
impl DiagApi {
    /// Database connectivity check
    #[oai(path = "/test-db", method = "get", tag = "DiagTags::Diagnostics")]
    async fn test_db(&self) -> Result<Json<TestDbResponse>, DiagError> {
        self.user_store.ping().await?;

        Ok(Json(TestDbResponse {
            status: "success".to_string(),
            message: "Database connection OK".to_string(),
        }))
    }

    /// Row counts for the users and user_badges tables
    #[oai(path = "/db-status", method = "get", tag = "DiagTags::Diagnostics")]
    async fn db_status(&self) -> Result<Json<DbStatusResponse>, DiagError> {
        let users = self.user_store.count().await?;
        let badges = self.user_store.badge_count().await?;

        Ok(Json(DbStatusResponse {
            status: "success".to_string(),
            users,
            badges,
        }))
    }

    /// List every user, unpaginated
    #[oai(path = "/users", method = "get", tag = "DiagTags::Diagnostics")]
    async fn list_users(&self) -> Result<Json<UserListResponse>, DiagError> {
        let users: Vec<UserDto> = self
            .user_store
            .list_all()
            .await?
            .into_iter()
            .map(UserDto::from)
            .collect();

        Ok(Json(UserListResponse {
            status: "success".to_string(),
            count: users.len() as u64,
            users,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_api() -> DiagApi {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        DiagApi::new(Arc::new(UserStore::new(db)))
    }

    #[tokio::test]
    async fn test_test_db_reports_success() {
        let api = setup_api().await;
        let response = api.test_db().await.unwrap();
        assert_eq!(response.status, "success");
    }

    #[tokio::test]
    async fn test_db_status_counts_start_at_zero() {
        let api = setup_api().await;
        let response = api.db_status().await.unwrap();
        assert_eq!(response.users, 0);
        assert_eq!(response.badges, 0);
    }

    #[tokio::test]
    async fn test_users_lists_seeded_accounts() {
        let api = setup_api().await;
        api.user_store.seed_sample_users().await.unwrap();

        let response = api.list_users().await.unwrap();
        assert_eq!(response.count, 3);

        let mut roles: Vec<&str> = response.users.iter().map(|u| u.role.as_str()).collect();
        roles.sort();
        assert_eq!(roles, vec!["admin", "donor", "ngo"]);
    }
}
