//! `/posts` handlers.

use actix_web::{HttpRequest, HttpResponse, web};

use postdesk_core::CrudService;
use postdesk_core::domain::{NewPost, Post, PostChanges};
use postdesk_shared::dto::{PatchPostRequest, PostRequest, PostResponse};
use postdesk_shared::{ApiResponse, MessageResponse, PagedResponse};

use super::params;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn render(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

fn draft(body: PostRequest) -> NewPost {
    NewPost {
        title: body.title,
        content: body.content,
    }
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(draft(body.into_inner())).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        render(post),
        "Post created successfully",
    )))
}

/// GET /posts?page=&limit=
pub async fn list(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    let pagination = params::pagination(&req);
    let page = state.posts.get_with_pagination(pagination).await?;

    Ok(HttpResponse::Ok().json(PagedResponse {
        data: page.items.into_iter().map(render).collect(),
        page: pagination.page(),
        limit: pagination.limit(),
        total: page.total,
    }))
}

/// GET /posts/{id}
pub async fn retrieve(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = params::record_id(&path)?;
    let post = state.posts.get_by_id(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(render(post))))
}

/// PUT /posts/{id} - full replacement.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = params::record_id(&path)?;
    let post = state.posts.update(id, draft(body.into_inner())).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        render(post),
        "Post updated successfully",
    )))
}

/// PATCH /posts/{id} - only the supplied fields change.
pub async fn partial_update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PatchPostRequest>,
) -> AppResult<HttpResponse> {
    let id = params::record_id(&path)?;
    let body = body.into_inner();
    if body.is_empty() {
        return Err(AppError::BadRequest("No data provided for update".to_string()));
    }

    let changes = PostChanges {
        title: body.title,
        content: body.content,
    };
    let post = state.posts.partial_update(id, changes).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        render(post),
        "Post updated successfully",
    )))
}

/// DELETE /posts/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = params::record_id(&path)?;
    state.posts.delete(id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}
