use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::business::data::BusinessData;
use crate::domains::business::models::business::Business;
use crate::domains::notification::models::notification::Notification as NotificationModel;

/// Notification API data type
///
/// Admin-facing representation: the work item plus the full attribute set of
/// the business under review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationData {
    /// Unique identifier
    pub id: String,

    /// The business this review refers to
    pub business_id: String,

    /// Review status: pending, approved, or rejected
    pub status: String,

    /// When the work item was created
    pub created_at: DateTime<Utc>,

    /// The referenced business, expanded
    pub business: BusinessData,
}

impl NotificationData {
    pub fn from_parts(notification: NotificationModel, business: Business) -> Self {
        Self {
            id: notification.id.to_string(),
            business_id: notification.business_id.to_string(),
            status: notification.status,
            created_at: notification.created_at,
            business: business.into(),
        }
    }
}
