/// Post service - creation and the enriched listing query.
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use mongodb::Database;

use crate::db::post_repo;
use crate::error::Result;
use crate::metrics;
use crate::models::{PostRecord, PostSummary, SortBy, Timeframe};

pub struct PostService {
    db: Database,
}

impl PostService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create a new post with both timestamps set to now.
    pub async fn create_post(
        &self,
        title: &str,
        description: &str,
        link: Option<String>,
        tags: Vec<String>,
        author_name: Option<String>,
    ) -> Result<ObjectId> {
        let record = PostRecord::new(title, description, link, tags, author_name);
        let id = post_repo::insert_post(&self.db, &record).await?;
        metrics::POSTS_CREATED_TOTAL.inc();
        Ok(id)
    }

    /// One page of posts enriched with live vote/comment counts, plus the
    /// total count of posts in the time window. The total uses the time
    /// filter only, so it is stable across pages and sort orders.
    pub async fn list_posts(
        &self,
        timeframe: Timeframe,
        sort_by: SortBy,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<PostSummary>, u64)> {
        let filter = post_repo::created_since_filter(timeframe.since(Utc::now()));

        let posts =
            post_repo::list_posts_with_counts(&self.db, filter.clone(), sort_by, page, page_size)
                .await?;
        let total = post_repo::count_posts(&self.db, filter).await?;

        Ok((posts.into_iter().map(PostSummary::from).collect(), total))
    }
}
