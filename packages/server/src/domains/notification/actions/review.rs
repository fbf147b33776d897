//! Review action - apply the approve/reject transition to a pending business

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::common::{ApiError, NotificationId};
use crate::domains::business::models::business::{Business, ReviewStatus};
use crate::domains::notification::models::notification::Notification;
use crate::kernel::{BaseMailer, ServerDeps};

/// Delivery attempts for the decision email before giving up
const EMAIL_MAX_ATTEMPTS: u32 = 3;

/// The two terminal review decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn status(self) -> ReviewStatus {
        match self {
            ReviewDecision::Approve => ReviewStatus::Approved,
            ReviewDecision::Reject => ReviewStatus::Rejected,
        }
    }
}

/// Apply a review decision to a notification and its business.
///
/// Both status writes run inside one transaction (business first). The
/// decision email is dispatched after commit as a background task; delivery
/// failure never fails the request.
///
/// Re-invoking on an already-reviewed notification re-applies the requested
/// terminal status (last-write-wins) but sends no email: only the
/// pending-to-terminal transition notifies the business.
pub async fn review(
    notification_id: NotificationId,
    decision: ReviewDecision,
    deps: &ServerDeps,
) -> Result<Notification, ApiError> {
    let notification = Notification::find_by_id(notification_id, &deps.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Notification"))?;

    let business = Business::find_by_id(notification.business_id, &deps.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Business"))?;

    let was_pending = notification.status == ReviewStatus::Pending.to_string();

    let updated = Notification::apply_review(
        notification.id,
        business.id,
        decision.status(),
        &deps.db_pool,
    )
    .await?;

    info!(
        notification_id = %updated.id,
        business_id = %business.id,
        status = %updated.status,
        "Review decision applied"
    );

    if was_pending {
        dispatch_decision_email(deps.mailer.clone(), business, decision);
    } else {
        warn!(
            notification_id = %updated.id,
            "Notification was already reviewed, re-applied status without email"
        );
    }

    Ok(updated)
}

/// Send the decision email as a fire-and-forget background task.
///
/// Bounded retry with a fixed backoff; exhaustion is logged and swallowed
/// since the state transition has already committed.
fn dispatch_decision_email(
    mailer: Arc<dyn BaseMailer>,
    business: Business,
    decision: ReviewDecision,
) {
    let (subject, body) = decision_message(&business, decision);

    tokio::spawn(async move {
        for attempt in 1..=EMAIL_MAX_ATTEMPTS {
            match mailer.send(&business.email, &subject, &body).await {
                Ok(()) => {
                    info!(
                        business_id = %business.id,
                        to = %business.email,
                        "Decision email delivered"
                    );
                    return;
                }
                Err(e) if attempt < EMAIL_MAX_ATTEMPTS => {
                    warn!(
                        business_id = %business.id,
                        attempt = attempt,
                        error = %e,
                        "Decision email failed, retrying"
                    );
                    tokio::time::sleep(Duration::from_secs(2 * attempt as u64)).await;
                }
                Err(e) => {
                    error!(
                        business_id = %business.id,
                        to = %business.email,
                        error = %e,
                        "Decision email failed after all attempts"
                    );
                }
            }
        }
    });
}

/// Build the subject and body of the decision email.
fn decision_message(business: &Business, decision: ReviewDecision) -> (String, String) {
    match decision {
        ReviewDecision::Approve => (
            "Your franchise listing has been approved".to_string(),
            format!(
                "Hello {},\n\n\
                 Your registration for \"{}\" has been approved and is now \
                 visible to investors on FranchiseBridge.\n\n\
                 The FranchiseBridge Team",
                business.company_name, business.franchise_name
            ),
        ),
        ReviewDecision::Reject => (
            "Update on your franchise listing".to_string(),
            format!(
                "Hello {},\n\n\
                 After review, your registration for \"{}\" was not approved \
                 for listing on FranchiseBridge. You can reply to this email \
                 if you believe this was a mistake.\n\n\
                 The FranchiseBridge Team",
                business.company_name, business.franchise_name
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::common::BusinessId;

    fn sample_business() -> Business {
        Business {
            id: BusinessId::new(),
            company_name: "Acme".to_string(),
            industry: "Food".to_string(),
            year_established: "2010".to_string(),
            headquarters: "Austin, TX".to_string(),
            website: "https://acme.example".to_string(),
            franchise_name: "Acme Express".to_string(),
            franchise_description: "Quick service".to_string(),
            investment_range: "$100k-$250k".to_string(),
            franchise_fee: "$30k".to_string(),
            royalty_fee: "5%".to_string(),
            email: "owner@acme.example".to_string(),
            financial_documents: None,
            is_agreed: true,
            status: "pending".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_decision_maps_to_terminal_status() {
        assert_eq!(ReviewDecision::Approve.status(), ReviewStatus::Approved);
        assert_eq!(ReviewDecision::Reject.status(), ReviewStatus::Rejected);
    }

    #[test]
    fn test_decision_message_mentions_franchise() {
        let business = sample_business();

        let (subject, body) = decision_message(&business, ReviewDecision::Approve);
        assert!(subject.contains("approved"));
        assert!(body.contains("Acme Express"));

        let (subject, body) = decision_message(&business, ReviewDecision::Reject);
        assert!(subject.contains("Update"));
        assert!(body.contains("not approved"));
    }
}
