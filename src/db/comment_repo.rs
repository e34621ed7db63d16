/// Comment repository.
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::FindOptions;
use mongodb::Database;

use crate::db::COMMENT_COLLECTION;
use crate::error::Result;
use crate::models::CommentRecord;

/// Insert a comment and return its identifier.
pub async fn insert_comment(db: &Database, comment: &CommentRecord) -> Result<ObjectId> {
    db.collection::<CommentRecord>(COMMENT_COLLECTION)
        .insert_one(comment, None)
        .await?;
    Ok(comment.id)
}

/// All comments for a post, newest first. The `post_id` is matched as plain
/// text; an unknown id yields an empty list, not an error.
pub async fn find_comments_by_post(db: &Database, post_id: &str) -> Result<Vec<CommentRecord>> {
    let options = FindOptions::builder()
        .sort(doc! { "created_at": -1 })
        .build();
    let cursor = db
        .collection::<CommentRecord>(COMMENT_COLLECTION)
        .find(doc! { "post_id": post_id }, options)
        .await?;

    Ok(cursor.try_collect().await?)
}
