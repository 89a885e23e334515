//! Password hashing port.

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash. Nothing calls this yet; there is
    /// no login flow.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Malformed password hash")]
    MalformedHash,
}
