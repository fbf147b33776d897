use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{BusinessId, NotificationId};
use crate::domains::business::models::business::ReviewStatus;

/// Notification - an admin-facing work item for one pending business review
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Notification {
    pub id: NotificationId,
    pub business_id: BusinessId,
    pub status: String, // 'pending', 'approved', 'rejected'
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Notification {
    /// Find notification by ID
    pub async fn find_by_id(id: NotificationId, pool: &PgPool) -> Result<Option<Self>> {
        let notification =
            sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(notification)
    }

    /// Find all notifications still awaiting review, oldest first
    pub async fn find_pending(pool: &PgPool) -> Result<Vec<Self>> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE status = 'pending' ORDER BY created_at",
        )
        .fetch_all(pool)
        .await?;
        Ok(notifications)
    }

    /// Find the notification created for a business
    pub async fn find_by_business_id(
        business_id: BusinessId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let notification =
            sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE business_id = $1")
                .bind(business_id)
                .fetch_optional(pool)
                .await?;
        Ok(notification)
    }

    /// Create the review work item for a freshly registered business
    pub async fn create(business_id: BusinessId, pool: &PgPool) -> Result<Self> {
        let notification = sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (business_id, status)
             VALUES ($1, 'pending')
             RETURNING *",
        )
        .bind(business_id)
        .fetch_one(pool)
        .await?;
        Ok(notification)
    }

    /// Apply a review decision to this notification and its business.
    ///
    /// Both status writes run in one transaction, business first, so the two
    /// records cannot diverge on a partial failure.
    pub async fn apply_review(
        id: NotificationId,
        business_id: BusinessId,
        decision: ReviewStatus,
        pool: &PgPool,
    ) -> Result<Self> {
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE businesses SET status = $2, updated_at = now() WHERE id = $1")
            .bind(business_id)
            .bind(decision.to_string())
            .execute(&mut *tx)
            .await?;

        let notification = sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(decision.to_string())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(notification)
    }
}
