//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container handed to every
//! action. External services hide behind trait abstractions so tests can
//! substitute mocks.

use anyhow::Result;
use async_trait::async_trait;
use mailer::MailerService;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domains::auth::JwtService;
use crate::kernel::BaseMailer;

// =============================================================================
// MailerService Adapter (implements BaseMailer trait)
// =============================================================================

/// Wrapper around MailerService that implements the BaseMailer trait
pub struct MailerAdapter(pub Arc<MailerService>);

impl MailerAdapter {
    pub fn new(service: Arc<MailerService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseMailer for MailerAdapter {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        self.0
            .send(to, subject, body)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to domain actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub mailer: Arc<dyn BaseMailer>,
    /// JWT service for token creation
    pub jwt_service: Arc<JwtService>,
    /// Directory uploaded financial documents are written to
    pub upload_dir: String,
    /// Emails granted admin privileges at registration
    pub admin_emails: Vec<String>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        db_pool: PgPool,
        mailer: Arc<dyn BaseMailer>,
        jwt_service: Arc<JwtService>,
        upload_dir: String,
        admin_emails: Vec<String>,
    ) -> Self {
        Self {
            db_pool,
            mailer,
            jwt_service,
            upload_dir,
            admin_emails,
        }
    }
}
