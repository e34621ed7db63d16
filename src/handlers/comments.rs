/// Comment handlers - HTTP endpoints for comment operations
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::db::Store;
use crate::error::Result;
use crate::handlers::IdResponse;
use crate::models::CommentView;
use crate::services::CommentService;

/// Request body for creating a comment
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "post_id must not be empty"))]
    pub post_id: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    pub author_name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentListResponse {
    pub items: Vec<CommentView>,
}

/// Add a comment to an existing post
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = "comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = IdResponse),
        (status = 400, description = "Missing or empty required field"),
        (status = 404, description = "Referenced post does not exist"),
        (status = 500, description = "Document store unavailable"),
    )
)]
pub async fn create_comment(
    store: web::Data<Store>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let payload = req.into_inner();
    payload.validate()?;

    let service = CommentService::new(store.database()?.clone());
    let id = service
        .create_comment(&payload.post_id, &payload.content, payload.author_name)
        .await?;

    Ok(HttpResponse::Created().json(IdResponse { id: id.to_hex() }))
}

/// List comments for a post, newest first
#[utoipa::path(
    get,
    path = "/api/comments/{post_id}",
    tag = "comments",
    params(("post_id" = String, Path, description = "Identifier of the post")),
    responses(
        (status = 200, description = "Comments for the post", body = CommentListResponse),
        (status = 500, description = "Document store unavailable"),
    )
)]
pub async fn list_comments(
    store: web::Data<Store>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let service = CommentService::new(store.database()?.clone());
    let items = service.list_for_post(&post_id).await?;

    Ok(HttpResponse::Ok().json(CommentListResponse { items }))
}
