//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Marks a PATCH field as supplied. An explicit JSON `null` counts as
/// supplied with an empty value so it fails the same check as `""`.
fn supplied<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

/// Body of `POST /posts` and `PUT /posts/{id}`.
/// Omitted fields deserialize as empty and are rejected by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Body of `PATCH /posts/{id}`. Absent keys stay `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchPostRequest {
    #[serde(default, deserialize_with = "supplied", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "supplied", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PatchPostRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Post as rendered to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `?page=&limit=` as received. Kept as raw strings so bad values can fall
/// back to defaults instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Body of `POST /users` and `PUT /users/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `PATCH /users/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchUserRequest {
    #[serde(default, deserialize_with = "supplied", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "supplied", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "supplied", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl PatchUserRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
