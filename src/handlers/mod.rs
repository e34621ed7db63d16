/// HTTP request handlers
pub mod comments;
pub mod health;
pub mod posts;
pub mod votes;

pub use comments::{create_comment, list_comments};
pub use health::{health, root, store_diagnostics};
pub use posts::{create_post, list_posts};
pub use votes::toggle_vote;

use serde::Serialize;
use utoipa::ToSchema;

/// Identifier of a newly created record, rendered as hex text.
#[derive(Debug, Serialize, ToSchema)]
pub struct IdResponse {
    pub id: String,
}
