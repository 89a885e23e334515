//! `/users` handlers. Responses never include the password hash.

use actix_web::{HttpResponse, web};

use postdesk_core::CrudService;
use postdesk_core::domain::{NewUser, User, UserChanges};
use postdesk_shared::dto::{PatchUserRequest, UserRequest, UserResponse};
use postdesk_shared::{ApiResponse, CountedResponse, MessageResponse};

use super::params;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn render(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

fn draft(body: UserRequest) -> NewUser {
    NewUser {
        name: body.name,
        email: body.email,
        password: body.password,
    }
}

/// POST /users
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<UserRequest>,
) -> AppResult<HttpResponse> {
    let user = state.users.create(draft(body.into_inner())).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        render(user),
        "User created successfully",
    )))
}

/// GET /users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.get_all().await?;

    Ok(HttpResponse::Ok().json(CountedResponse::new(
        users.into_iter().map(render).collect(),
    )))
}

/// GET /users/{id}
pub async fn retrieve(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = params::record_id(&path)?;
    let user = state.users.get_by_id(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        render(user),
        "User retrieved successfully",
    )))
}

/// PUT /users/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UserRequest>,
) -> AppResult<HttpResponse> {
    let id = params::record_id(&path)?;
    let user = state.users.update(id, draft(body.into_inner())).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        render(user),
        "User updated successfully",
    )))
}

/// PATCH /users/{id}
pub async fn partial_update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PatchUserRequest>,
) -> AppResult<HttpResponse> {
    let id = params::record_id(&path)?;
    let body = body.into_inner();
    if body.is_empty() {
        return Err(AppError::BadRequest("No data provided for update".to_string()));
    }

    let changes = UserChanges {
        name: body.name,
        email: body.email,
        password: body.password,
    };
    let user = state.users.partial_update(id, changes).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        render(user),
        "User updated successfully",
    )))
}

/// DELETE /users/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = params::record_id(&path)?;
    state.users.delete(id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted successfully")))
}
