//! Business listing routes: submission (multipart) and the public listing

use axum::extract::{Extension, Multipart};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::common::ApiError;
use crate::domains::business::actions::{list_businesses, register_business, UploadedDocument};
use crate::domains::business::models::business::CreateBusiness;
use crate::domains::business::BusinessData;
use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct SubmitBusinessResponse {
    pub success: bool,
    pub business: BusinessData,
}

/// Collected multipart text fields for a business submission.
///
/// Missing fields stay empty and fail required-field validation in the
/// action, so the handler never rejects on shape alone.
#[derive(Default)]
struct BusinessForm {
    company_name: String,
    industry: String,
    year_established: String,
    headquarters: String,
    website: String,
    franchise_name: String,
    franchise_description: String,
    investment_range: String,
    franchise_fee: String,
    royalty_fee: String,
    email: String,
    is_agreed: Option<bool>,
}

/// POST /businesses - submit a new franchise listing (multipart/form-data)
pub async fn submit_business_handler(
    Extension(state): Extension<AxumAppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SubmitBusinessResponse>), ApiError> {
    let mut form = BusinessForm::default();
    let mut document: Option<UploadedDocument> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "financial_documents" {
            let file_name = field.file_name().unwrap_or("document").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::Validation(format!("unreadable upload: {}", e)))?;
            if !bytes.is_empty() {
                document = Some(UploadedDocument {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| ApiError::Validation(format!("unreadable field {}: {}", name, e)))?;

        match name.as_str() {
            "company_name" => form.company_name = value,
            "industry" => form.industry = value,
            "year_established" => form.year_established = value,
            "headquarters" => form.headquarters = value,
            "website" => form.website = value,
            "franchise_name" => form.franchise_name = value,
            "franchise_description" => form.franchise_description = value,
            "investment_range" => form.investment_range = value,
            "franchise_fee" => form.franchise_fee = value,
            "royalty_fee" => form.royalty_fee = value,
            "email" => form.email = value,
            "is_agreed" => form.is_agreed = value.parse().ok(),
            // Unknown fields (including any client-supplied status) are ignored
            _ => {}
        }
    }

    let input = CreateBusiness::builder()
        .company_name(form.company_name)
        .industry(form.industry)
        .year_established(form.year_established)
        .headquarters(form.headquarters)
        .website(form.website)
        .franchise_name(form.franchise_name)
        .franchise_description(form.franchise_description)
        .investment_range(form.investment_range)
        .franchise_fee(form.franchise_fee)
        .royalty_fee(form.royalty_fee)
        .email(form.email)
        .is_agreed(form.is_agreed.unwrap_or(true))
        .build();

    let business = register_business(input, document, &state.server_deps).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitBusinessResponse {
            success: true,
            business: business.into(),
        }),
    ))
}

/// GET /businesses - list every listing (clients filter by status/industry)
pub async fn list_businesses_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Vec<BusinessData>>, ApiError> {
    let businesses = list_businesses(&state.server_deps).await?;
    Ok(Json(businesses.into_iter().map(Into::into).collect()))
}
