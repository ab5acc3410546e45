use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::errors::UserStoreError;
use crate::services::crypto;
use crate::types::db::user::{self, Entity as User};
use crate::types::db::user_badge::{self, Entity as UserBadge};
use crate::types::internal::{NewUser, UserRole};

/// Badge granted to the seeded sample accounts
const SEED_BADGE: &str = "Founding Member";

/// Explicit data-access functions over the users and user_badges tables.
///
/// All writes go through here; handlers never touch the ORM entities
/// directly.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a new user.
    ///
    /// Duplicate email is rejected both by a pre-check and by mapping the
    /// unique-constraint violation from the insert, so concurrent duplicate
    /// registrations cannot double-insert.
    pub async fn register(&self, new_user: NewUser) -> Result<user::Model, UserStoreError> {
        let existing = User::find()
            .filter(user::Column::Email.eq(&new_user.email))
            .one(&self.db)
            .await
            .map_err(|e| UserStoreError::database("find_user_by_email", e))?;

        if existing.is_some() {
            return Err(UserStoreError::DuplicateEmail);
        }

        let password_hash = hash_password(&new_user.password)?;
        let now = Utc::now().timestamp();

        let model = user::ActiveModel {
            name: Set(new_user.name),
            email: Set(new_user.email),
            password_hash: Set(password_hash),
            role: Set(new_user.role.as_str().to_string()),
            cis: Set(new_user.cis),
            bio: Set(new_user.bio),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model.insert(&self.db).await.map_err(|e| {
            let message = e.to_string();
            if message.contains("UNIQUE") || message.contains("unique") {
                UserStoreError::DuplicateEmail
            } else {
                UserStoreError::database("insert_user", e)
            }
        })?;

        Ok(inserted)
    }

    /// Verify email/password and return the user on success.
    ///
    /// Unknown email and wrong password collapse into the same error so
    /// callers cannot enumerate accounts.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<user::Model, UserStoreError> {
        let found = User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| UserStoreError::database("verify_credentials", e))?;

        let found = found.ok_or(UserStoreError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&found.password_hash)
            .map_err(|_| UserStoreError::InvalidCredentials)?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| UserStoreError::InvalidCredentials)?;

        Ok(found)
    }

    /// Fetch a user with its badges.
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<(user::Model, Vec<user_badge::Model>), UserStoreError> {
        let found = User::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UserStoreError::database("find_user_by_id", e))?
            .ok_or(UserStoreError::UserNotFound(id))?;

        let badges = UserBadge::find()
            .filter(user_badge::Column::UserId.eq(id))
            .order_by_asc(user_badge::Column::EarnedAt)
            .all(&self.db)
            .await
            .map_err(|e| UserStoreError::database("find_user_badges", e))?;

        Ok((found, badges))
    }

    /// Full table listing, no pagination.
    pub async fn list_all(&self) -> Result<Vec<user::Model>, UserStoreError> {
        User::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| UserStoreError::database("list_users", e))
    }

    pub async fn count(&self) -> Result<u64, UserStoreError> {
        User::find()
            .count(&self.db)
            .await
            .map_err(|e| UserStoreError::database("count_users", e))
    }

    pub async fn badge_count(&self) -> Result<u64, UserStoreError> {
        UserBadge::find()
            .count(&self.db)
            .await
            .map_err(|e| UserStoreError::database("count_badges", e))
    }

    /// Grant a badge to a user.
    pub async fn award_badge(
        &self,
        user_id: i32,
        badge_name: &str,
    ) -> Result<user_badge::Model, UserStoreError> {
        let badge = user_badge::ActiveModel {
            user_id: Set(user_id),
            badge_name: Set(badge_name.to_string()),
            earned_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        badge
            .insert(&self.db)
            .await
            .map_err(|e| UserStoreError::database("insert_badge", e))
    }

    /// Delete a user and its badges in one transaction. The badges delete is
    /// explicit rather than left to the schema-level cascade.
    ///
    /// Returns whether a user row was removed.
    pub async fn delete_user(&self, id: i32) -> Result<bool, UserStoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UserStoreError::database("begin_delete_user", e))?;

        UserBadge::delete_many()
            .filter(user_badge::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| UserStoreError::database("delete_user_badges", e))?;

        let result = User::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| UserStoreError::database("delete_user", e))?;

        txn.commit()
            .await
            .map_err(|e| UserStoreError::database("commit_delete_user", e))?;

        Ok(result.rows_affected > 0)
    }

    /// Insert the three fixed sample accounts (admin/ngo/donor), but only
    /// when the users table is empty. Passwords are generated per boot and
    /// logged once; nothing is hardcoded.
    ///
    /// Returns whether seeding happened.
    pub async fn seed_sample_users(&self) -> Result<bool, UserStoreError> {
        if self.count().await? > 0 {
            return Ok(false);
        }

        let samples = [
            ("Aid Administrator", "admin@aidline.example", UserRole::Admin),
            ("Shanti Seva Foundation", "ngo@aidline.example", UserRole::Ngo),
            ("Priya Sharma", "donor@aidline.example", UserRole::Donor),
        ];

        for (name, email, role) in samples {
            let password = crypto::generate_secure_password();
            let created = self
                .register(NewUser {
                    name: name.to_string(),
                    email: email.to_string(),
                    password: password.clone(),
                    role,
                    cis: None,
                    bio: None,
                })
                .await?;

            self.award_badge(created.id, SEED_BADGE).await?;

            tracing::info!(
                email = email,
                role = %role,
                password = password.as_str(),
                "seeded sample account (password generated for this installation)"
            );
        }

        Ok(true)
    }

    /// Database connectivity check for the diagnostic endpoint.
    pub async fn ping(&self) -> Result<(), UserStoreError> {
        self.db
            .ping()
            .await
            .map_err(|e| UserStoreError::database("ping", e))
    }
}

fn hash_password(password: &str) -> Result<String, UserStoreError> {
    let salt = SaltString::generate(&mut rand_core::OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| UserStoreError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}
