// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "send the decision email") lives in domain actions
// that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseMailer)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Mailer Trait (Infrastructure - transactional email)
// =============================================================================

#[async_trait]
pub trait BaseMailer: Send + Sync {
    /// Send a plain-text email to a single recipient
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}
