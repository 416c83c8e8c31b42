use async_trait::async_trait;
use gallery_model::{User, UserId};

use super::rows::UserRow;
use super::{PostgresCatalogueStore, translate};
use crate::database::ports::{NewUser, UserRepository};
use crate::error::{CatalogueError, EntityKind, Result};

#[async_trait]
impl UserRepository for PostgresCatalogueStore {
    async fn insert_user(&self, user: NewUser) -> Result<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password_hash, email, full_name, role, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING
                id, username, password_hash, email, full_name, role,
                is_active, created_at, last_login_at
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(user.role.as_i16())
        .bind(user.is_active)
        .bind(user.created_at)
        .fetch_one(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to insert user"))?;

        row.try_into()
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = $2, password_hash = $3, email = $4, full_name = $5,
                role = $6, is_active = $7, last_login_at = $8
            WHERE id = $1
            "#,
        )
        .bind(user.id.get())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(user.role.as_i16())
        .bind(user.is_active)
        .bind(user.last_login_at)
        .execute(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to update user"))?;

        if result.rows_affected() == 0 {
            return Err(CatalogueError::not_found(EntityKind::User, user.id));
        }
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| translate(e, "Failed to start user deletion"))?;

        // Likes cascade with the account; take their counts back first.
        sqlx::query(
            r#"
            UPDATE artworks
            SET like_count = GREATEST(like_count - 1, 0)
            WHERE id IN (SELECT artwork_id FROM likes WHERE user_id = $1)
            "#,
        )
        .bind(id.get())
        .execute(&mut *tx)
        .await
        .map_err(|e| translate(e, "Failed to release user likes"))?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.get())
            .execute(&mut *tx)
            .await
            .map_err(|e| translate(e, "Failed to delete user"))?;

        if result.rows_affected() == 0 {
            return Err(CatalogueError::not_found(EntityKind::User, id));
        }

        tx.commit()
            .await
            .map_err(|e| translate(e, "Failed to commit user deletion"))?;
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id, username, password_hash, email, full_name, role,
                is_active, created_at, last_login_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to load user"))?;

        row.map(User::try_from).transpose()
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id, username, password_hash, email, full_name, role,
                is_active, created_at, last_login_at
            FROM users
            WHERE LOWER(username) = LOWER($1)
            "#,
        )
        .bind(username.trim())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to look up user by name"))?;

        row.map(User::try_from).transpose()
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id, username, password_hash, email, full_name, role,
                is_active, created_at, last_login_at
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email.trim())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to look up user by email"))?;

        row.map(User::try_from).transpose()
    }

    async fn count_users(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool())
            .await
            .map_err(|e| translate(e, "Failed to count users"))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}
