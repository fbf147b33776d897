// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::BaseMailer;

// =============================================================================
// Mock Mailer
// =============================================================================

/// A message captured by the mock mailer
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mock mailer that records every send instead of talking to the provider
pub struct MockMailer {
    sent: Arc<Mutex<Vec<SentMail>>>,
    fail_sends: Arc<Mutex<bool>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_sends: Arc::new(Mutex::new(false)),
        }
    }

    /// Make every subsequent send fail (for delivery-failure tests)
    pub fn set_failing(&self, failing: bool) {
        *self.fail_sends.lock().unwrap() = failing;
    }

    /// All messages sent so far
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of messages sent so far
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Check if a message was sent to the given recipient
    pub fn was_sent_to(&self, to: &str) -> bool {
        self.sent.lock().unwrap().iter().any(|m| m.to == to)
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMailer for MockMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        if *self.fail_sends.lock().unwrap() {
            return Err(anyhow::anyhow!("mock mailer configured to fail"));
        }

        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
