/// Vote handlers - HTTP endpoint for the vote toggle
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::db::Store;
use crate::error::Result;
use crate::services::{VoteService, VoteToggle};

/// Request body for toggling a vote
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ToggleVoteRequest {
    #[validate(length(min = 1, message = "post_id must not be empty"))]
    pub post_id: String,
    #[validate(length(min = 1, message = "client_id must not be empty"))]
    pub client_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VoteStatus {
    Voted,
    Unvoted,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ToggleVoteResponse {
    pub status: VoteStatus,
    /// Identifier of the newly created vote; absent on unvote.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Toggle the vote for a `(post_id, client_id)` pair
#[utoipa::path(
    post,
    path = "/api/vote/toggle",
    tag = "votes",
    request_body = ToggleVoteRequest,
    responses(
        (status = 200, description = "Vote toggled", body = ToggleVoteResponse),
        (status = 400, description = "Missing or empty required field"),
        (status = 404, description = "Referenced post does not exist"),
        (status = 500, description = "Document store unavailable"),
    )
)]
pub async fn toggle_vote(
    store: web::Data<Store>,
    req: web::Json<ToggleVoteRequest>,
) -> Result<HttpResponse> {
    let payload = req.into_inner();
    payload.validate()?;

    let service = VoteService::new(store.database()?.clone());
    let response = match service.toggle(&payload.post_id, &payload.client_id).await? {
        VoteToggle::Voted { id } => ToggleVoteResponse {
            status: VoteStatus::Voted,
            id: Some(id.to_hex()),
        },
        VoteToggle::Unvoted => ToggleVoteResponse {
            status: VoteStatus::Unvoted,
            id: None,
        },
    };

    Ok(HttpResponse::Ok().json(response))
}
