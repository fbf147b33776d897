use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::BusinessId;

/// Business - a franchise listing submitted for admin review
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Business {
    pub id: BusinessId,
    pub company_name: String,
    pub industry: String,
    pub year_established: String,
    pub headquarters: String,
    pub website: String,
    pub franchise_name: String,
    pub franchise_description: String,
    pub investment_range: String,
    pub franchise_fee: String,
    pub royalty_fee: String,
    pub email: String,

    /// Relative URL path of the uploaded financial document, if any
    pub financial_documents: Option<String>,
    pub is_agreed: bool,

    // Review workflow
    pub status: String, // 'pending', 'approved', 'rejected'

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review status enum (shared by Business.status and Notification.status)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Pending => write!(f, "pending"),
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(ReviewStatus::Pending),
            "approved" => Ok(ReviewStatus::Approved),
            "rejected" => Ok(ReviewStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid review status: {}", s)),
        }
    }
}

/// Input for creating a new Business listing
#[derive(Debug, Clone, TypedBuilder)]
pub struct CreateBusiness {
    pub company_name: String,
    pub industry: String,
    pub year_established: String,
    pub headquarters: String,
    pub website: String,
    pub franchise_name: String,
    pub franchise_description: String,
    pub investment_range: String,
    pub franchise_fee: String,
    pub royalty_fee: String,
    pub email: String,
    #[builder(default)]
    pub financial_documents: Option<String>,
    #[builder(default = true)]
    pub is_agreed: bool,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Business {
    /// Find business by ID
    pub async fn find_by_id(id: BusinessId, pool: &PgPool) -> Result<Option<Self>> {
        let business = sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(business)
    }

    /// Find business by registered email
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        let business = sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(business)
    }

    /// Find all businesses (clients filter by status/industry themselves)
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let businesses =
            sqlx::query_as::<_, Business>("SELECT * FROM businesses ORDER BY created_at")
                .fetch_all(pool)
                .await?;
        Ok(businesses)
    }

    /// Insert a new business listing.
    ///
    /// Status is always 'pending' on creation, regardless of client input.
    /// A unique violation on `email` is surfaced as the raw sqlx error so the
    /// caller can map it to a duplicate-email failure.
    pub async fn create(input: CreateBusiness, pool: &PgPool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Business>(
            "INSERT INTO businesses (
                company_name,
                industry,
                year_established,
                headquarters,
                website,
                franchise_name,
                franchise_description,
                investment_range,
                franchise_fee,
                royalty_fee,
                email,
                financial_documents,
                is_agreed,
                status
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, 'pending')
             RETURNING *",
        )
        .bind(&input.company_name)
        .bind(&input.industry)
        .bind(&input.year_established)
        .bind(&input.headquarters)
        .bind(&input.website)
        .bind(&input.franchise_name)
        .bind(&input.franchise_description)
        .bind(&input.investment_range)
        .bind(&input.franchise_fee)
        .bind(&input.royalty_fee)
        .bind(&input.email)
        .bind(&input.financial_documents)
        .bind(input.is_agreed)
        .fetch_one(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_review_status_roundtrip() {
        for status in [
            ReviewStatus::Pending,
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
        ] {
            let parsed = ReviewStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_review_status_rejects_unknown() {
        assert!(ReviewStatus::from_str("suspended").is_err());
        assert!(ReviewStatus::from_str("").is_err());
    }

    #[test]
    fn test_create_business_builder_defaults() {
        let input = CreateBusiness::builder()
            .company_name("Acme".to_string())
            .industry("Food".to_string())
            .year_established("2010".to_string())
            .headquarters("Austin, TX".to_string())
            .website("https://acme.example".to_string())
            .franchise_name("Acme Express".to_string())
            .franchise_description("Quick service".to_string())
            .investment_range("$100k-$250k".to_string())
            .franchise_fee("$30k".to_string())
            .royalty_fee("5%".to_string())
            .email("owner@acme.example".to_string())
            .build();

        assert!(input.financial_documents.is_none());
        assert!(input.is_agreed);
    }
}
