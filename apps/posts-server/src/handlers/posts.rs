//! The `/posts` collection.

use actix_web::{HttpResponse, web};

use postboard_core::domain::{Post, PostId};
use postboard_core::ports::PostResource;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /posts
pub async fn create(state: web::Data<AppState>, body: web::Json<Post>) -> AppResult<HttpResponse> {
    let post = body.into_inner();
    state.posts.create(&post).await?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(post))
}

/// PUT /posts/{id}
pub async fn replace(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<Post>,
) -> AppResult<HttpResponse> {
    let id = PostId(path.into_inner());
    let post = body.into_inner();
    state.posts.replace(id, &post).await?;

    tracing::info!(post_id = %id, "Post replaced");
    Ok(HttpResponse::Ok().json(Post { id, ..post }))
}

/// DELETE /posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<u64>) -> AppResult<HttpResponse> {
    let id = PostId(path.into_inner());
    state.posts.delete(id).await?;

    tracing::info!(post_id = %id, "Post deleted");
    Ok(HttpResponse::Ok().json(serde_json::json!({})))
}
