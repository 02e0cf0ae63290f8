use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use blog_service::cms::CmsClient;
use blog_service::handlers;
use blog_service::render::RendererRegistry;
use blog_service::services::{CommentService, PostService};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn health_summary(client: web::Data<CmsClient>) -> HttpResponse {
    match client.health_check().await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("Content store unreachable: {}", e),
            "service": "blog-service"
        })),
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = terminate.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    }
}

/// Blog Service
///
/// Serves blog page payloads assembled from a hosted headless document
/// store, and accepts public comment submissions written back to the store
/// as unapproved documents.
///
/// # Routes
///
/// - `GET /` - Home page payload (all posts, card form)
/// - `GET /post/{slug}` - Post page payload with approved comments
/// - `GET /api/v1/slugs` - Slugs of every post page
/// - `POST /api/v1/comments` - Submit a comment for moderation
/// - `GET /api/v1/health` - Health summary
#[actix_web::main]
async fn main() -> io::Result<()> {
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
    let config = match blog_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        "Content store: project={} dataset={}",
        config.cms.project_id,
        config.cms.dataset
    );

    if config.cms.token.is_none() {
        tracing::warn!("CMS_TOKEN not configured; comment submission will fail");
    }

    // Construct the store client explicitly and pass it in; no ambient state
    let cms_client = CmsClient::new(config.cms.clone());

    match cms_client.health_check().await {
        Ok(()) => tracing::info!("Content store connection validated"),
        Err(e) => tracing::warn!("Content store health check failed at startup: {}", e),
    }

    let post_service = web::Data::new(PostService::new(cms_client.clone()));
    let comment_service = web::Data::new(CommentService::new(cms_client.clone()));
    let renderer_registry = web::Data::new(RendererRegistry::with_defaults());
    let cms_client_data = web::Data::new(cms_client);

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let server = HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(post_service.clone())
            .app_data(comment_service.clone())
            .app_data(renderer_registry.clone())
            .app_data(cms_client_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/api/v1/health", web::get().to(health_summary))
            .route("/api/v1/slugs", web::get().to(handlers::list_slugs))
            .route("/api/v1/comments", web::post().to(handlers::submit_comment))
            .route("/", web::get().to(handlers::home))
            .route("/post/{slug}", web::get().to(handlers::post_page))
    })
    .bind(&bind_address)?
    .workers(4)
    .disable_signals()
    .run();

    let server_handle = server.handle();
    let mut server_task = tokio::spawn(server);

    tokio::select! {
        result = &mut server_task => {
            match result {
                Ok(res) => res?,
                Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
            }
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            match server_task.await {
                Ok(res) => res?,
                Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
            }
        }
    }

    tracing::info!("Blog-service shutting down");

    Ok(())
}
