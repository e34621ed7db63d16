/// Comment service - creation behind a post-existence check, and listing.
use mongodb::bson::oid::ObjectId;
use mongodb::Database;

use crate::db::comment_repo;
use crate::error::Result;
use crate::metrics;
use crate::models::{CommentRecord, CommentView};
use crate::services::require_post;

pub struct CommentService {
    db: Database,
}

impl CommentService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create a comment on an existing post. An unknown or malformed
    /// `post_id` fails with not-found before any mutation.
    pub async fn create_comment(
        &self,
        post_id: &str,
        content: &str,
        author_name: Option<String>,
    ) -> Result<ObjectId> {
        require_post(&self.db, post_id).await?;

        let record = CommentRecord::new(post_id, content, author_name);
        let id = comment_repo::insert_comment(&self.db, &record).await?;
        metrics::COMMENTS_CREATED_TOTAL.inc();
        Ok(id)
    }

    /// All comments for a post, newest first. No existence check: an
    /// unknown post id simply lists nothing.
    pub async fn list_for_post(&self, post_id: &str) -> Result<Vec<CommentView>> {
        let comments = comment_repo::find_comments_by_post(&self.db, post_id).await?;
        Ok(comments.into_iter().map(CommentView::from).collect())
    }
}
