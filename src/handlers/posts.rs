/// Post handlers - HTTP endpoints for listing and creating posts
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::db::Store;
use crate::error::Result;
use crate::handlers::IdResponse;
use crate::models::{PostSummary, SortBy, Timeframe};
use crate::services::PostService;

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    8
}

/// Query parameters for the post listing.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsParams {
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: i64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 50))]
    pub page_size: i64,
    #[serde(default)]
    pub timeframe: Timeframe,
    #[serde(default)]
    pub sort_by: SortBy,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostListResponse {
    pub items: Vec<PostSummary>,
    pub total: u64,
    pub page: i64,
    pub page_size: i64,
}

/// Request body for creating a post
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author_name: Option<String>,
}

/// List posts with live vote/comment counts
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(ListPostsParams),
    responses(
        (status = 200, description = "One page of enriched posts", body = PostListResponse),
        (status = 400, description = "Page or page size out of range"),
        (status = 500, description = "Document store unavailable"),
    )
)]
pub async fn list_posts(
    store: web::Data<Store>,
    query: web::Query<ListPostsParams>,
) -> Result<HttpResponse> {
    let params = query.into_inner();
    params.validate()?;

    let service = PostService::new(store.database()?.clone());
    let (items, total) = service
        .list_posts(params.timeframe, params.sort_by, params.page, params.page_size)
        .await?;

    Ok(HttpResponse::Ok().json(PostListResponse {
        items,
        total,
        page: params.page,
        page_size: params.page_size,
    }))
}

/// Create a new post
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = IdResponse),
        (status = 400, description = "Missing or empty required field"),
        (status = 500, description = "Document store unavailable"),
    )
)]
pub async fn create_post(
    store: web::Data<Store>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let payload = req.into_inner();
    payload.validate()?;

    let service = PostService::new(store.database()?.clone());
    let id = service
        .create_post(
            &payload.title,
            &payload.description,
            payload.link,
            payload.tags,
            payload.author_name,
        )
        .await?;

    Ok(HttpResponse::Created().json(IdResponse { id: id.to_hex() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_defaults() {
        let query = web::Query::<ListPostsParams>::from_query("").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 8);
        assert_eq!(query.timeframe, Timeframe::All);
        assert_eq!(query.sort_by, SortBy::Votes);
    }

    #[test]
    fn test_list_params_overrides() {
        let query = web::Query::<ListPostsParams>::from_query(
            "page=2&page_size=50&timeframe=week&sort_by=latest",
        )
        .unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 50);
        assert_eq!(query.timeframe, Timeframe::Week);
        assert_eq!(query.sort_by, SortBy::Latest);
    }

    #[test]
    fn test_list_params_reject_unknown_variants() {
        assert!(web::Query::<ListPostsParams>::from_query("sort_by=oldest").is_err());
        assert!(web::Query::<ListPostsParams>::from_query("timeframe=year").is_err());
    }

    #[test]
    fn test_list_params_bounds() {
        let query = web::Query::<ListPostsParams>::from_query("page=0").unwrap();
        assert!(query.validate().is_err());

        let query = web::Query::<ListPostsParams>::from_query("page_size=51").unwrap();
        assert!(query.validate().is_err());

        let query = web::Query::<ListPostsParams>::from_query("page=1&page_size=50").unwrap();
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_create_post_requires_non_empty_fields() {
        let payload = CreatePostRequest {
            title: "".into(),
            description: "A clean daily tech digest".into(),
            link: None,
            tags: vec![],
            author_name: None,
        };
        assert!(payload.validate().is_err());

        let payload = CreatePostRequest {
            title: "Adless News".into(),
            description: "".into(),
            link: None,
            tags: vec![],
            author_name: None,
        };
        assert!(payload.validate().is_err());

        let payload = CreatePostRequest {
            title: "Adless News".into(),
            description: "A clean daily tech digest".into(),
            link: Some("https://adless.news".into()),
            tags: vec!["Media".into()],
            author_name: Some("Sage".into()),
        };
        assert!(payload.validate().is_ok());
    }
}
