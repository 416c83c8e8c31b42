use std::sync::Arc;

use gallery_model::{User, UserId, UserRole};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use zeroize::Zeroize;

use super::crypto::PasswordCrypto;
use super::validation::Violations;
use crate::clock::Clock;
use crate::database::ports::{CatalogueStore, NewUser};
use crate::error::{CatalogueError, EntityKind, Result};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Sign-up form. Passwords are wiped from memory when the form drops.
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(default, skip_serializing)]
    pub confirm_password: String,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .finish_non_exhaustive()
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.password.zeroize();
        self.confirm_password.zeroize();
    }
}

impl Registration {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        full_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let password = password.into();
        Self {
            username: username.into(),
            email: email.into(),
            full_name: full_name.into(),
            confirm_password: password.clone(),
            password,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut violations = Violations::new();
        violations
            .length("Username", &self.username, 3, 50)
            .email(&self.email)
            .max_length("Full name", &self.full_name, 100)
            .check(
                self.password.chars().count() >= MIN_PASSWORD_LENGTH,
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
            )
            .check(
                self.password == self.confirm_password,
                "Passwords do not match",
            );
        violations.into_result()
    }
}

#[derive(Debug, Clone)]
pub struct UserService {
    store: Arc<dyn CatalogueStore>,
    clock: Arc<dyn Clock>,
    crypto: Arc<PasswordCrypto>,
}

impl UserService {
    pub fn new(
        store: Arc<dyn CatalogueStore>,
        clock: Arc<dyn Clock>,
        crypto: Arc<PasswordCrypto>,
    ) -> Self {
        Self {
            store,
            clock,
            crypto,
        }
    }

    pub async fn get(&self, id: UserId) -> Result<User> {
        self.store
            .get_user(id)
            .await?
            .ok_or_else(|| CatalogueError::not_found(EntityKind::User, id))
    }

    pub async fn register(&self, registration: Registration) -> Result<User> {
        self.register_with_role(registration, UserRole::User).await
    }

    pub async fn register_with_role(
        &self,
        registration: Registration,
        role: UserRole,
    ) -> Result<User> {
        registration.validate()?;
        let username = registration.username.trim();
        let email = registration.email.trim();

        if self.store.find_user_by_username(username).await?.is_some() {
            warn!(username, "username already taken");
            return Err(CatalogueError::Conflict(
                "Username is already taken".to_string(),
            ));
        }
        if self.store.find_user_by_email(email).await?.is_some() {
            warn!("email already registered");
            return Err(CatalogueError::Conflict(
                "Email is already registered".to_string(),
            ));
        }

        let password_hash = self.crypto.hash_password(&registration.password)?;
        let user = self
            .store
            .insert_user(NewUser {
                username: username.to_string(),
                password_hash,
                email: email.to_string(),
                full_name: registration.full_name.trim().to_string(),
                role,
                is_active: true,
                created_at: self.clock.now(),
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, %role, "user registered");
        Ok(user)
    }

    /// Checks credentials and stamps the login time. Unknown users and wrong
    /// passwords get the same message.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        let rejected = || CatalogueError::invalid("Invalid username or password");

        let Some(mut user) = self.store.find_user_by_username(username).await? else {
            warn!(username, "login for unknown user");
            return Err(rejected());
        };

        if !self.crypto.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "wrong password");
            return Err(rejected());
        }

        if !user.is_active {
            warn!(user_id = %user.id, "login for disabled account");
            return Err(CatalogueError::invalid("This account has been disabled"));
        }

        user.last_login_at = Some(self.clock.now());
        self.store.update_user(&user).await?;
        info!(user_id = %user.id, "user signed in");
        Ok(user)
    }

    pub async fn set_active(&self, id: UserId, active: bool) -> Result<User> {
        let mut user = self.get(id).await?;
        user.is_active = active;
        self.store.update_user(&user).await?;
        info!(user_id = %id, active, "user activation changed");
        Ok(user)
    }

    /// Deletes the account. Its likes go with it and the affected artworks'
    /// counters drop accordingly.
    pub async fn delete(&self, id: UserId) -> Result<()> {
        self.store.delete_user(id).await?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}
