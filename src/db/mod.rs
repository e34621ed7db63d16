/// Document store access layer
///
/// `Store` wraps an optional database handle: the service starts whether or
/// not `DATABASE_URL` is set, and handlers surface `StoreUnavailable` lazily
/// on first store access instead of failing the process at startup.
use mongodb::bson::doc;
use mongodb::{Client, Database};

use crate::config::DatabaseConfig;
use crate::error::{AppError, Result};

pub mod comment_repo;
pub mod post_repo;
pub mod vote_repo;

/// Collection holding idea posts.
pub const POST_COLLECTION: &str = "post";
/// Collection holding comments, keyed to posts by stringified id.
pub const COMMENT_COLLECTION: &str = "comment";
/// Collection holding per-client votes, keyed to posts by stringified id.
pub const VOTE_COLLECTION: &str = "vote";

/// Shared handle to the document store with an explicit unavailable state.
#[derive(Clone)]
pub struct Store {
    db: Option<Database>,
}

impl Store {
    /// Build a store handle from configuration. Connection establishment is
    /// lazy in the driver; an unset or unparsable URL yields an unavailable
    /// handle rather than an error.
    pub async fn connect(config: &DatabaseConfig) -> Self {
        let Some(url) = config.url.as_deref() else {
            return Self::unavailable();
        };

        match Client::with_uri_str(url).await {
            Ok(client) => Self {
                db: Some(client.database(&config.name)),
            },
            Err(err) => {
                tracing::warn!("Failed to build store client: {}", err);
                Self::unavailable()
            }
        }
    }

    /// A handle with no backing store; every `database()` call fails.
    pub fn unavailable() -> Self {
        Self { db: None }
    }

    pub fn is_configured(&self) -> bool {
        self.db.is_some()
    }

    /// The database handle, or `StoreUnavailable` if none is configured.
    pub fn database(&self) -> Result<&Database> {
        self.db
            .as_ref()
            .ok_or_else(|| AppError::StoreUnavailable("database not configured".to_string()))
    }

    /// Round-trip connectivity check.
    pub async fn ping(&self) -> Result<()> {
        let db = self.database()?;
        db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    /// Collection names, for the diagnostics endpoint.
    pub async fn collection_names(&self) -> Result<Vec<String>> {
        let db = self.database()?;
        Ok(db.list_collection_names(None).await?)
    }
}
