/// Post repository: inserts, lookups, and the listing aggregation pipeline.
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, doc, Document};
use mongodb::Database;

use crate::db::{COMMENT_COLLECTION, POST_COLLECTION, VOTE_COLLECTION};
use crate::error::Result;
use crate::models::{PostRecord, PostWithCounts, SortBy};

/// Insert a post and return its identifier.
pub async fn insert_post(db: &Database, post: &PostRecord) -> Result<ObjectId> {
    db.collection::<PostRecord>(POST_COLLECTION)
        .insert_one(post, None)
        .await?;
    Ok(post.id)
}

/// Find a post by identifier.
pub async fn find_post_by_id(db: &Database, post_id: ObjectId) -> Result<Option<PostRecord>> {
    let post = db
        .collection::<PostRecord>(POST_COLLECTION)
        .find_one(doc! { "_id": post_id }, None)
        .await?;
    Ok(post)
}

/// Count posts matching a filter. The listing total uses the time filter
/// only, so it is invariant under page and sort changes.
pub async fn count_posts(db: &Database, filter: Document) -> Result<u64> {
    let count = db
        .collection::<PostRecord>(POST_COLLECTION)
        .count_documents(filter, None)
        .await?;
    Ok(count)
}

/// Time-window filter over `created_at`; empty when no lower bound applies.
pub fn created_since_filter(since: Option<DateTime<Utc>>) -> Document {
    match since {
        Some(ts) => doc! { "created_at": { "$gte": bson::DateTime::from_chrono(ts) } },
        None => Document::new(),
    }
}

/// Correlated `$lookup` counting stage source: collects documents from
/// `collection` whose `post_id` text equals the stringified post `_id`.
fn correlated_lookup(collection: &str, output: &str) -> Document {
    doc! {
        "$lookup": {
            "from": collection,
            "let": { "pid": { "$toString": "$_id" } },
            "pipeline": [
                { "$match": { "$expr": { "$eq": ["$post_id", "$$pid"] } } }
            ],
            "as": output,
        }
    }
}

/// Build the post listing pipeline: time filter, correlated vote/comment
/// counts, sort, and pagination. Counts are recomputed on every call; there
/// is no maintained counter field.
pub fn listing_pipeline(
    filter: Document,
    sort_by: SortBy,
    page: i64,
    page_size: i64,
) -> Vec<Document> {
    vec![
        doc! { "$match": filter },
        correlated_lookup(VOTE_COLLECTION, "vote_docs"),
        correlated_lookup(COMMENT_COLLECTION, "comment_docs"),
        doc! {
            "$addFields": {
                "votes_count": { "$size": "$vote_docs" },
                "comments_count": { "$size": "$comment_docs" },
            }
        },
        doc! { "$project": { "vote_docs": 0, "comment_docs": 0 } },
        doc! { "$sort": sort_by.sort_stage() },
        doc! { "$skip": (page - 1) * page_size },
        doc! { "$limit": page_size },
    ]
}

/// Run the listing pipeline and decode one page of enriched posts.
pub async fn list_posts_with_counts(
    db: &Database,
    filter: Document,
    sort_by: SortBy,
    page: i64,
    page_size: i64,
) -> Result<Vec<PostWithCounts>> {
    let pipeline = listing_pipeline(filter, sort_by, page, page_size);
    let mut cursor = db
        .collection::<Document>(POST_COLLECTION)
        .aggregate(pipeline, None)
        .await?;

    let mut posts = Vec::new();
    while let Some(document) = cursor.try_next().await? {
        posts.push(bson::from_document::<PostWithCounts>(document)?);
    }
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_pipeline_stage_order() {
        let pipeline = listing_pipeline(Document::new(), SortBy::Votes, 1, 8);
        let stages: Vec<&str> = pipeline
            .iter()
            .map(|stage| stage.keys().next().unwrap().as_str())
            .collect();
        assert_eq!(
            stages,
            [
                "$match",
                "$lookup",
                "$lookup",
                "$addFields",
                "$project",
                "$sort",
                "$skip",
                "$limit"
            ]
        );
    }

    #[test]
    fn test_pipeline_pagination_arithmetic() {
        let pipeline = listing_pipeline(Document::new(), SortBy::Latest, 3, 10);
        assert_eq!(pipeline[6].get_i64("$skip").unwrap(), 20);
        assert_eq!(pipeline[7].get_i64("$limit").unwrap(), 10);

        let first_page = listing_pipeline(Document::new(), SortBy::Latest, 1, 50);
        assert_eq!(first_page[6].get_i64("$skip").unwrap(), 0);
        assert_eq!(first_page[7].get_i64("$limit").unwrap(), 50);
    }

    #[test]
    fn test_pipeline_correlates_post_id_as_text() {
        let pipeline = listing_pipeline(Document::new(), SortBy::Votes, 1, 8);
        let lookup = pipeline[1].get_document("$lookup").unwrap();
        assert_eq!(lookup.get_str("from").unwrap(), VOTE_COLLECTION);

        let vars = lookup.get_document("let").unwrap();
        assert_eq!(
            vars.get_document("pid").unwrap().get_str("$toString").unwrap(),
            "$_id"
        );

        let sub_match = lookup.get_array("pipeline").unwrap()[0]
            .as_document()
            .unwrap()
            .get_document("$match")
            .unwrap();
        let operands = sub_match
            .get_document("$expr")
            .unwrap()
            .get_array("$eq")
            .unwrap();
        assert_eq!(operands[0], Bson::String("$post_id".into()));
        assert_eq!(operands[1], Bson::String("$$pid".into()));

        let comment_lookup = pipeline[2].get_document("$lookup").unwrap();
        assert_eq!(comment_lookup.get_str("from").unwrap(), COMMENT_COLLECTION);
    }

    #[test]
    fn test_pipeline_projects_lookup_arrays_away() {
        let pipeline = listing_pipeline(Document::new(), SortBy::Comments, 1, 8);
        let counts = pipeline[3].get_document("$addFields").unwrap();
        assert!(counts.contains_key("votes_count"));
        assert!(counts.contains_key("comments_count"));

        let projection = pipeline[4].get_document("$project").unwrap();
        assert_eq!(projection.get_i32("vote_docs").unwrap(), 0);
        assert_eq!(projection.get_i32("comment_docs").unwrap(), 0);
    }

    #[test]
    fn test_created_since_filter() {
        assert!(created_since_filter(None).is_empty());

        let filter = created_since_filter(Some(Utc::now()));
        let bound = filter.get_document("created_at").unwrap();
        assert!(matches!(bound.get("$gte"), Some(Bson::DateTime(_))));
    }

    #[test]
    fn test_pipeline_sort_matches_mode() {
        let pipeline = listing_pipeline(Document::new(), SortBy::Comments, 1, 8);
        let sort = pipeline[5].get_document("$sort").unwrap();
        let keys: Vec<&str> = sort.keys().map(String::as_str).collect();
        assert_eq!(keys, ["comments_count", "created_at"]);
    }
}
