use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use vibehunt::db::Store;
use vibehunt::openapi::ApiDoc;
use vibehunt::{bootstrap, handlers, metrics, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting vibehunt v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let store = Store::connect(&config.database).await;
    if store.is_configured() {
        tracing::info!("Document store handle ready ({})", config.database.name);
    } else {
        tracing::warn!(
            "DATABASE_URL not set; store-backed endpoints will report unavailable"
        );
    }

    if config.bootstrap.seed_demo {
        if let Ok(db) = store.database() {
            match bootstrap::seed_demo(db).await {
                Ok(true) => tracing::info!("Seeded demo board content"),
                Ok(false) => tracing::debug!("Post collection not empty; demo seed skipped"),
                Err(e) => tracing::warn!("Demo seed failed: {:#}", e),
            }
        }
    }

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let store_data = web::Data::new(store);
    let allowed_origins = config.cors.allowed_origins.clone();

    HttpServer::new(move || {
        // Build CORS configuration; the default posture is fully open.
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let openapi_doc = ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api/openapi.json", openapi_doc),
            )
            .route("/metrics", web::get().to(metrics::serve_metrics))
            .route("/", web::get().to(handlers::root))
            .route("/health", web::get().to(handlers::health))
            .route("/test", web::get().to(handlers::store_diagnostics))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/posts")
                            .route("", web::get().to(handlers::list_posts))
                            .route("", web::post().to(handlers::create_post)),
                    )
                    .service(
                        web::scope("/comments")
                            .route("", web::post().to(handlers::create_comment))
                            .route("/{post_id}", web::get().to(handlers::list_comments)),
                    )
                    .service(
                        web::scope("/vote")
                            .route("/toggle", web::post().to(handlers::toggle_vote)),
                    ),
            )
    })
    .bind(&bind_address)?
    .workers(4)
    .run()
    .await
}
