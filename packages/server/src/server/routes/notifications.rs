//! Admin review routes: pending notifications and the approve/reject
//! transitions

use axum::extract::{Extension, Path};
use axum::Json;
use serde::Serialize;

use crate::common::{ApiError, NotificationId};
use crate::domains::notification::actions::{list_pending, review, ReviewDecision};
use crate::domains::notification::NotificationData;
use crate::server::app::AxumAppState;
use crate::server::middleware::{require_admin, AuthUser};

#[derive(Serialize)]
pub struct ReviewResponse {
    pub success: bool,
    pub notification_id: String,
    pub status: String,
}

/// GET /notifications - pending reviews with embedded business data (admin)
pub async fn list_notifications_handler(
    Extension(state): Extension<AxumAppState>,
    auth: Option<Extension<AuthUser>>,
) -> Result<Json<Vec<NotificationData>>, ApiError> {
    require_admin(auth.as_deref())?;

    let pending = list_pending(&state.server_deps).await?;
    Ok(Json(pending))
}

/// POST /notifications/:id/approve (admin)
pub async fn approve_notification_handler(
    Extension(state): Extension<AxumAppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<String>,
) -> Result<Json<ReviewResponse>, ApiError> {
    review_handler(state, auth, id, ReviewDecision::Approve).await
}

/// POST /notifications/:id/reject (admin)
pub async fn reject_notification_handler(
    Extension(state): Extension<AxumAppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<String>,
) -> Result<Json<ReviewResponse>, ApiError> {
    review_handler(state, auth, id, ReviewDecision::Reject).await
}

async fn review_handler(
    state: AxumAppState,
    auth: Option<Extension<AuthUser>>,
    id: String,
    decision: ReviewDecision,
) -> Result<Json<ReviewResponse>, ApiError> {
    require_admin(auth.as_deref())?;

    let notification_id = NotificationId::parse(&id)
        .map_err(|_| ApiError::Validation(format!("invalid notification id: {}", id)))?;

    let notification = review(notification_id, decision, &state.server_deps).await?;

    Ok(Json(ReviewResponse {
        success: true,
        notification_id: notification.id.to_string(),
        status: notification.status,
    }))
}
