/// Vote repository.
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Database;

use crate::db::VOTE_COLLECTION;
use crate::error::Result;
use crate::models::VoteRecord;

/// Find the live vote for an exact `(post_id, client_id)` pair.
pub async fn find_vote(
    db: &Database,
    post_id: &str,
    client_id: &str,
) -> Result<Option<VoteRecord>> {
    let vote = db
        .collection::<VoteRecord>(VOTE_COLLECTION)
        .find_one(doc! { "post_id": post_id, "client_id": client_id }, None)
        .await?;
    Ok(vote)
}

/// Insert a vote and return its identifier.
pub async fn insert_vote(db: &Database, vote: &VoteRecord) -> Result<ObjectId> {
    db.collection::<VoteRecord>(VOTE_COLLECTION)
        .insert_one(vote, None)
        .await?;
    Ok(vote.id)
}

/// Delete a vote by identifier.
pub async fn delete_vote_by_id(db: &Database, vote_id: ObjectId) -> Result<()> {
    db.collection::<VoteRecord>(VOTE_COLLECTION)
        .delete_one(doc! { "_id": vote_id }, None)
        .await?;
    Ok(())
}
