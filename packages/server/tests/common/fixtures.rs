//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods and actions directly to create
//! test data.

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use server_core::domains::business::actions::register_business;
use server_core::domains::business::models::business::{Business, CreateBusiness};
use server_core::kernel::ServerDeps;

/// A complete, valid registration input with the given company and email
pub fn sample_business_input(company: &str, email: &str) -> CreateBusiness {
    CreateBusiness::builder()
        .company_name(company.to_string())
        .industry("Food & Beverage".to_string())
        .year_established("2012".to_string())
        .headquarters("Minneapolis, MN".to_string())
        .website("https://example.org".to_string())
        .franchise_name(format!("{} Express", company))
        .franchise_description("Fast casual franchise".to_string())
        .investment_range("$100k-$250k".to_string())
        .franchise_fee("$35k".to_string())
        .royalty_fee("6%".to_string())
        .email(email.to_string())
        .build()
}

/// Submit a business through the registration action (creates the
/// notification too) and return it
pub async fn submit_test_business(
    deps: &ServerDeps,
    company: &str,
    email: &str,
) -> Result<Business> {
    let business = register_business(sample_business_input(company, email), None, deps)
        .await
        .map_err(|e| anyhow::anyhow!("registration failed: {}", e))?;
    Ok(business)
}

/// Count businesses registered with the given email
pub async fn count_businesses_with_email(pool: &PgPool, email: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT count(*) FROM businesses WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("Failed to count businesses")
}

/// Count notifications referencing the given business
pub async fn count_notifications_for_business(pool: &PgPool, business_id: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT count(*) FROM notifications WHERE business_id = $1")
        .bind(business_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count notifications")
}
