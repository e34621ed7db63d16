//! Prometheus metrics for the VibeHunt service.
//!
//! Exposes board activity collectors and an HTTP handler for the
//! `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    /// Total posts created.
    pub static ref POSTS_CREATED_TOTAL: IntCounter = register_int_counter!(
        "vibehunt_posts_created_total",
        "Total posts created"
    )
    .expect("failed to register vibehunt_posts_created_total");

    /// Total comments created.
    pub static ref COMMENTS_CREATED_TOTAL: IntCounter = register_int_counter!(
        "vibehunt_comments_created_total",
        "Total comments created"
    )
    .expect("failed to register vibehunt_comments_created_total");

    /// Vote toggles segmented by outcome (voted/unvoted).
    pub static ref VOTES_TOGGLED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "vibehunt_votes_toggled_total",
        "Vote toggles segmented by outcome",
        &["action"]
    )
    .expect("failed to register vibehunt_votes_toggled_total");
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
