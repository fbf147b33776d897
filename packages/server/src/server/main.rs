// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use mailer::{MailerOptions, MailerService};
use server_core::kernel::{BaseMailer, MailerAdapter};
use server_core::server::build_app;
use server_core::Config;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FranchiseBridge API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    // Create mail service
    let mailer_service = Arc::new(MailerService::new(MailerOptions {
        api_key: config.sendgrid_api_key,
        from_email: config.mail_from_email,
        from_name: config.mail_from_name,
    }));
    let mailer: Arc<dyn BaseMailer> = Arc::new(MailerAdapter::new(mailer_service));

    // Build application
    let (app, _deps) = build_app(
        pool,
        mailer,
        config.jwt_secret,
        config.jwt_issuer,
        config.upload_dir,
        config.admin_emails,
    );

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
