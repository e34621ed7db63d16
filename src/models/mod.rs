/// Data models for the VibeHunt service
///
/// Store records mirror the three collections (`post`, `comment`, `vote`).
/// Comments and votes reference their post by the hex text of its ObjectId;
/// existence is validated at write time, not enforced by the store.
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A submitted idea post, the root entity of the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author_name: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl PostRecord {
    pub fn new(
        title: &str,
        description: &str,
        link: Option<String>,
        tags: Vec<String>,
        author_name: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::new(),
            title: title.to_string(),
            description: description.to_string(),
            link,
            tags,
            author_name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Free-text reply attached to a post. Never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub post_id: String,
    pub author_name: Option<String>,
    pub content: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl CommentRecord {
    pub fn new(post_id: &str, content: &str, author_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::new(),
            post_id: post_id.to_string(),
            author_name,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Anonymous per-client upvote. At most one live vote per
/// `(post_id, client_id)` pair under sequential toggling; the only record
/// type that is ever deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub post_id: String,
    pub client_id: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl VoteRecord {
    pub fn new(post_id: &str, client_id: &str) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::new(),
            post_id: post_id.to_string(),
            client_id: client_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A post as produced by the listing aggregation pipeline, with live
/// correlated counts attached.
#[derive(Debug, Clone, Deserialize)]
pub struct PostWithCounts {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    pub votes_count: i64,
    pub comments_count: i64,
}

/// API view of a listed post: identifiers as hex text, timestamps as
/// RFC 3339 text.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub tags: Vec<String>,
    pub author_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub votes_count: i64,
    pub comments_count: i64,
}

impl From<PostWithCounts> for PostSummary {
    fn from(post: PostWithCounts) -> Self {
        Self {
            id: post.id.to_hex(),
            title: post.title,
            description: post.description,
            link: post.link,
            tags: post.tags,
            author_name: post.author_name,
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
            votes_count: post.votes_count,
            comments_count: post.comments_count,
        }
    }
}

/// API view of a comment.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentView {
    pub id: String,
    pub post_id: String,
    pub author_name: Option<String>,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CommentRecord> for CommentView {
    fn from(comment: CommentRecord) -> Self {
        Self {
            id: comment.id.to_hex(),
            post_id: comment.post_id,
            author_name: comment.author_name,
            content: comment.content,
            created_at: comment.created_at.to_rfc3339(),
            updated_at: comment.updated_at.to_rfc3339(),
        }
    }
}

/// Relative recency window used to filter posts by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Week,
    Month,
    #[default]
    All,
}

impl Timeframe {
    /// Lower bound of the window relative to `now`, or `None` for `all`.
    pub fn since(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Timeframe::Week => Some(now - chrono::Duration::days(7)),
            Timeframe::Month => Some(now - chrono::Duration::days(30)),
            Timeframe::All => None,
        }
    }
}

/// Sort order for the post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Votes,
    Comments,
    Latest,
}

impl SortBy {
    /// `$sort` stage for this order. Count sorts tie-break on newer
    /// `created_at` first; ties beyond that are store-order-dependent.
    pub fn sort_stage(self) -> Document {
        match self {
            SortBy::Votes => doc! { "votes_count": -1, "created_at": -1 },
            SortBy::Comments => doc! { "comments_count": -1, "created_at": -1 },
            SortBy::Latest => doc! { "created_at": -1 },
        }
    }
}
