use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, RecordId};
use crate::error::DomainError;

/// User entity - represents a user in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for User {
    const ENTITY_TYPE: &'static str = "user";

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn touch(&mut self, now: DateTime<Utc>, inserted: bool) {
        if inserted {
            self.created_at = now;
        }
        self.updated_at = now;
    }
}

fn check_email(email: &str) -> Result<(), DomainError> {
    if !email.contains('@') {
        return Err(DomainError::invalid("email"));
    }
    Ok(())
}

/// Full user input. `password` is plain text; the service hashes it.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::required("name"));
        }
        if self.email.is_empty() {
            return Err(DomainError::required("email"));
        }
        check_email(&self.email)?;
        if self.password.is_empty() {
            return Err(DomainError::required("password"));
        }
        Ok(())
    }
}

/// Sparse change-set for a user.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.as_deref().is_some_and(str::is_empty) {
            return Err(DomainError::empty("name"));
        }
        if let Some(email) = self.email.as_deref() {
            if email.is_empty() {
                return Err(DomainError::empty("email"));
            }
            check_email(email)?;
        }
        if self.password.as_deref().is_some_and(str::is_empty) {
            return Err(DomainError::empty("password"));
        }
        Ok(())
    }
}
