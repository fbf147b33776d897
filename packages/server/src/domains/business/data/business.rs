use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::business::models::business::Business as BusinessModel;

/// Business API data type
///
/// Public API representation of a business listing (for JSON responses)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessData {
    /// Unique identifier
    pub id: String,

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

    /// Contact email the decision notice is sent to
    pub email: String,

    /// Relative URL of the uploaded financial document, if any
    pub financial_documents: Option<String>,

    /// Review status: pending, approved, or rejected
    pub status: String,

    /// When the listing was submitted
    pub created_at: DateTime<Utc>,
}

impl From<BusinessModel> for BusinessData {
    fn from(business: BusinessModel) -> Self {
        Self {
            id: business.id.to_string(),
            company_name: business.company_name,
            industry: business.industry,
            year_established: business.year_established,
            headquarters: business.headquarters,
            website: business.website,
            franchise_name: business.franchise_name,
            franchise_description: business.franchise_description,
            investment_range: business.investment_range,
            franchise_fee: business.franchise_fee,
            royalty_fee: business.royalty_fee,
            email: business.email,
            financial_documents: business.financial_documents,
            status: business.status,
            created_at: business.created_at,
        }
    }
}
