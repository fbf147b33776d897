//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::kernel::{BaseMailer, ServerDeps};
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    approve_notification_handler, forgot_password_handler, health_handler,
    list_businesses_handler, list_notifications_handler, login_handler, register_handler,
    reject_notification_handler, reset_password_handler, submit_business_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
    pub jwt_service: Arc<JwtService>,
}

/// Build the Axum application router
///
/// Returns (Router, Arc<ServerDeps>) - deps are also handed back so callers
/// (main, tests) can reach the injected services.
pub fn build_app(
    pool: PgPool,
    mailer: Arc<dyn BaseMailer>,
    jwt_secret: String,
    jwt_issuer: String,
    upload_dir: String,
    admin_emails: Vec<String>,
) -> (Router, Arc<ServerDeps>) {
    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(&jwt_secret, jwt_issuer));

    let server_deps = Arc::new(ServerDeps::new(
        pool.clone(),
        mailer,
        jwt_service.clone(),
        upload_dir.clone(),
        admin_emails,
    ));

    // Create shared app state
    let app_state = AxumAppState {
        db_pool: pool,
        server_deps: server_deps.clone(),
        jwt_service: jwt_service.clone(),
    };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Clone jwt_service for middleware closure
    let jwt_service_for_middleware = jwt_service.clone();

    // Rate limiting configuration
    // API: 10 requests per second per IP with burst of 20
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10) // Base rate: 10 requests per second
            .burst_size(20) // Allow bursts up to 20
            .use_headers() // Extract IP from X-Forwarded-For header
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );

    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    // API routes (rate limited)
    let api = Router::new()
        .route(
            "/businesses",
            post(submit_business_handler).get(list_businesses_handler),
        )
        .route("/notifications", get(list_notifications_handler))
        .route(
            "/notifications/:id/approve",
            post(approve_notification_handler),
        )
        .route(
            "/notifications/:id/reject",
            post(reject_notification_handler),
        )
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/forgot-password", post(forgot_password_handler))
        .route("/auth/reset-password", post(reset_password_handler))
        .layer(rate_limit_layer);

    let app = api
        // Health check (no rate limit)
        .route("/health", get(health_handler))
        // Uploaded financial documents, served statically
        .nest_service("/uploads", ServeDir::new(upload_dir))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service_for_middleware.clone(), req, next)
        })) // JWT authentication
        .layer(Extension(app_state)) // Add shared state
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    (app, server_deps)
}
