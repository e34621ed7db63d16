/// VibeHunt Service Library
///
/// Anonymous product-discovery board: users submit idea posts, comment on
/// them, and cast toggleable per-client upvotes. Posts are listed with
/// live vote and comment counts computed by an aggregation pipeline over
/// the document store.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Store records, listing summaries, and query enums
/// - `services`: Business logic layer
/// - `db`: Document store handle and repositories
/// - `bootstrap`: Idempotent demo-data seeding
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
/// - `openapi`: OpenAPI documentation
pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
