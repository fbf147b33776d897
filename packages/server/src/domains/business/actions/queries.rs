//! Read-side actions for business listings

use crate::common::ApiError;
use crate::domains::business::models::business::Business;
use crate::kernel::ServerDeps;

/// List every business listing.
///
/// No server-side filtering: investor dashboards filter by status and
/// industry themselves.
pub async fn list_businesses(deps: &ServerDeps) -> Result<Vec<Business>, ApiError> {
    let businesses = Business::find_all(&deps.db_pool).await?;
    Ok(businesses)
}
