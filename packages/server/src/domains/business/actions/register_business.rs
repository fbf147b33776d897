//! Register business action - handles listing submission with document upload

use anyhow::Context;
use tracing::{info, warn};

use crate::common::ApiError;
use crate::domains::business::models::business::{Business, CreateBusiness};
use crate::domains::notification::models::notification::Notification;
use crate::kernel::ServerDeps;

/// An uploaded financial document, as received from the multipart form
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Register a new business listing.
///
/// This action:
/// 1. Validates required fields (before any write)
/// 2. Stores the uploaded document, if present, and records its URL path
/// 3. Inserts the Business with status `pending`
/// 4. Inserts exactly one Notification referencing the new Business
///
/// The Business insert strictly precedes the Notification insert, so a
/// duplicate email leaves no Notification behind.
pub async fn register_business(
    mut input: CreateBusiness,
    document: Option<UploadedDocument>,
    deps: &ServerDeps,
) -> Result<Business, ApiError> {
    validate_required(&input)?;

    if let Some(doc) = document {
        input.financial_documents = Some(store_document(doc, deps).await?);
    }

    let email = input.email.clone();
    let business = match Business::create(input, &deps.db_pool).await {
        Ok(business) => business,
        Err(e) if ApiError::is_unique_violation(&e) => {
            warn!(email = %email, "Duplicate business registration rejected");
            return Err(ApiError::DuplicateEmail);
        }
        Err(e) => return Err(e.into()),
    };

    let notification = Notification::create(business.id, &deps.db_pool).await?;

    info!(
        business_id = %business.id,
        notification_id = %notification.id,
        "Business registered, queued for review"
    );

    Ok(business)
}

/// Validate that every required field is present and non-blank.
fn validate_required(input: &CreateBusiness) -> Result<(), ApiError> {
    let required = [
        ("company_name", &input.company_name),
        ("industry", &input.industry),
        ("year_established", &input.year_established),
        ("headquarters", &input.headquarters),
        ("website", &input.website),
        ("franchise_name", &input.franchise_name),
        ("franchise_description", &input.franchise_description),
        ("investment_range", &input.investment_range),
        ("franchise_fee", &input.franchise_fee),
        ("royalty_fee", &input.royalty_fee),
        ("email", &input.email),
    ];

    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(ApiError::Validation(format!("{} is required", name)));
        }
    }

    Ok(())
}

/// Store an uploaded document under the configured upload directory.
///
/// Filename is the upload timestamp plus the original extension; the returned
/// value is the relative URL path the file is served under.
async fn store_document(doc: UploadedDocument, deps: &ServerDeps) -> Result<String, ApiError> {
    let extension = std::path::Path::new(&doc.file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();

    let file_name = format!("{}{}", chrono::Utc::now().timestamp_millis(), extension);
    let path = std::path::Path::new(&deps.upload_dir).join(&file_name);

    tokio::fs::create_dir_all(&deps.upload_dir)
        .await
        .context("Failed to create upload directory")?;
    tokio::fs::write(&path, &doc.bytes)
        .await
        .context("Failed to store uploaded document")?;

    info!(path = %path.display(), size = doc.bytes.len(), "Stored financial document");

    Ok(format!("/uploads/{}", file_name))
}
