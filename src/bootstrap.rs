/// Idempotent demo-data seeding
///
/// Populates the board with a handful of demo posts, votes, and comments on
/// first startup against an empty store. The emptiness check is the guard:
/// any existing post skips the seed entirely, so restarts are no-ops.
use anyhow::Result;
use mongodb::bson::doc;
use mongodb::Database;

use crate::db::{COMMENT_COLLECTION, POST_COLLECTION, VOTE_COLLECTION};
use crate::models::{CommentRecord, PostRecord, VoteRecord};

/// Seed demo content if the post collection is empty. Returns whether a
/// seed happened.
pub async fn seed_demo(db: &Database) -> Result<bool> {
    let posts = db.collection::<PostRecord>(POST_COLLECTION);
    if posts.count_documents(doc! {}, None).await? > 0 {
        return Ok(false);
    }

    let records = demo_posts();
    posts.insert_many(&records, None).await?;

    let (votes, comments) = demo_engagement(&records);
    if !votes.is_empty() {
        db.collection::<VoteRecord>(VOTE_COLLECTION)
            .insert_many(&votes, None)
            .await?;
    }
    if !comments.is_empty() {
        db.collection::<CommentRecord>(COMMENT_COLLECTION)
            .insert_many(&comments, None)
            .await?;
    }

    Ok(true)
}

fn demo_posts() -> Vec<PostRecord> {
    vec![
        PostRecord::new(
            "AI Thumbnail Wizard",
            "Auto-generate YouTube thumbnails that actually get clicks using vibe-based prompts.",
            Some("https://ai-thumb-wizard.dev".to_string()),
            vec!["AI".to_string(), "Creator".to_string(), "SaaS".to_string()],
            Some("Nova".to_string()),
        ),
        PostRecord::new(
            "Tweet-to-Course",
            "Turn a viral tweet thread into a paid micro-course with landing page in minutes.",
            None,
            vec!["Education".to_string(), "NoCode".to_string()],
            Some("Ray".to_string()),
        ),
        PostRecord::new(
            "Adless News",
            "A clean daily tech digest with zero ads. Monetize via pro insights.",
            Some("https://adless.news".to_string()),
            vec!["Media".to_string(), "Subscription".to_string()],
            Some("Sage".to_string()),
        ),
        PostRecord::new(
            "Cold DM Crafter",
            "Personalized outreach messages that feel human and get replies.",
            None,
            vec!["Sales".to_string(), "AI".to_string()],
            Some("Ivy".to_string()),
        ),
    ]
}

/// Votes fan out so later demo posts carry more upvotes (post i gets i+1
/// votes from distinct seed clients); every post gets one comment.
fn demo_engagement(posts: &[PostRecord]) -> (Vec<VoteRecord>, Vec<CommentRecord>) {
    let mut votes = Vec::new();
    let mut comments = Vec::new();

    for (i, post) in posts.iter().enumerate() {
        let post_id = post.id.to_hex();
        for j in 0..=i {
            votes.push(VoteRecord::new(&post_id, &format!("seed-client-{}", j)));
        }
        comments.push(CommentRecord::new(
            &post_id,
            "Love this!",
            Some("Guest".to_string()),
        ));
    }

    (votes, comments)
}
