/// Business logic layer
///
/// Services own a database handle and compose repository operations into
/// the board's operations: post creation and listing, comment creation,
/// and the vote toggle.
use mongodb::bson::oid::ObjectId;
use mongodb::Database;

use crate::db::post_repo;
use crate::error::{AppError, Result};
use crate::models::PostRecord;

pub mod comments;
pub mod posts;
pub mod votes;

pub use comments::CommentService;
pub use posts::PostService;
pub use votes::{VoteService, VoteToggle};

/// Resolve `post_id` text to an existing post, or fail with not-found.
/// Malformed identifier text is indistinguishable from an absent post.
pub(crate) async fn require_post(db: &Database, post_id: &str) -> Result<PostRecord> {
    let oid = ObjectId::parse_str(post_id)
        .map_err(|_| AppError::NotFound("Post not found".to_string()))?;
    post_repo::find_post_by_id(db, oid)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
}
