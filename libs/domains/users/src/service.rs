use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, NewUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user with the password hashed at rest.
    ///
    /// A concurrent create with the same email is resolved by the storage
    /// constraint and surfaces as `DuplicateEmail`.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        let password_hash = self.hash_password(&input.password)?;

        self.repository
            .create(NewUser {
                email: input.email,
                password_hash,
            })
            .await
    }

    /// Get a user by exact email match.
    pub async fn get_user(&self, email: &str) -> UserResult<User> {
        self.repository
            .get_by_email(email)
            .await?
            .ok_or(UserError::NotFound)
    }

    /// Verify a plain password against a stored hash (login flows).
    pub fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| UserError::Storage(format!("stored hash unreadable: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::Storage(format!("password hashing failed: {}", e)))
    }
}
