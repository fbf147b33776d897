//! List pending reviews action

use tracing::warn;

use crate::common::ApiError;
use crate::domains::business::models::business::Business;
use crate::domains::notification::data::NotificationData;
use crate::domains::notification::models::notification::Notification;
use crate::kernel::ServerDeps;

/// List all notifications awaiting review, each expanded with its business.
///
/// A notification whose business row is missing is skipped with a warning
/// rather than failing the whole listing.
pub async fn list_pending(deps: &ServerDeps) -> Result<Vec<NotificationData>, ApiError> {
    let notifications = Notification::find_pending(&deps.db_pool).await?;

    let mut reviews = Vec::with_capacity(notifications.len());
    for notification in notifications {
        match Business::find_by_id(notification.business_id, &deps.db_pool).await? {
            Some(business) => reviews.push(NotificationData::from_parts(notification, business)),
            None => {
                warn!(
                    notification_id = %notification.id,
                    business_id = %notification.business_id,
                    "Pending notification references a missing business, skipping"
                );
            }
        }
    }

    Ok(reviews)
}
