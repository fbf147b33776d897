//! Integration tests for the business registration flow.
//!
//! Covers:
//! - a valid submission creates exactly one pending Business + one pending
//!   Notification referencing it
//! - a duplicate email is rejected and leaves the store unchanged
//! - required-field validation fails before any write
//! - an uploaded document is stored and its path recorded

mod common;

use crate::common::{
    count_businesses_with_email, count_notifications_for_business, sample_business_input,
    submit_test_business, TestHarness,
};
use server_core::common::ApiError;
use server_core::domains::business::actions::{register_business, UploadedDocument};
use server_core::domains::notification::models::notification::Notification;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn submit_creates_pending_business_and_notification(ctx: &TestHarness) {
    let deps = ctx.deps();

    let business = submit_test_business(&deps, "Acme", "a@x.com")
        .await
        .expect("Failed to submit business");

    assert_eq!(business.status, "pending");
    assert_eq!(business.company_name, "Acme");
    assert_eq!(count_businesses_with_email(&ctx.db_pool, "a@x.com").await, 1);

    // Exactly one notification referencing the new business, also pending
    assert_eq!(
        count_notifications_for_business(&ctx.db_pool, business.id.into_uuid()).await,
        1
    );
    let notification = Notification::find_by_business_id(business.id, &ctx.db_pool)
        .await
        .expect("Failed to load notification")
        .expect("Notification missing");
    assert_eq!(notification.status, "pending");
    assert_eq!(notification.business_id, business.id);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn duplicate_email_rejected_and_store_unchanged(ctx: &TestHarness) {
    let deps = ctx.deps();

    let first = submit_test_business(&deps, "Acme", "dup@x.com")
        .await
        .expect("First submission should succeed");

    // Second submission with the same email must fail with DuplicateEmail
    let err = register_business(sample_business_input("Imitator", "dup@x.com"), None, &deps)
        .await
        .expect_err("Duplicate email should be rejected");
    assert!(matches!(err, ApiError::DuplicateEmail));

    // Store unchanged: still 1 business, 1 notification
    assert_eq!(
        count_businesses_with_email(&ctx.db_pool, "dup@x.com").await,
        1
    );
    assert_eq!(
        count_notifications_for_business(&ctx.db_pool, first.id.into_uuid()).await,
        1
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn missing_required_field_fails_before_any_write(ctx: &TestHarness) {
    let deps = ctx.deps();

    let mut input = sample_business_input("Blanky", "blank@x.com");
    input.industry = "  ".to_string();

    let err = register_business(input, None, &deps)
        .await
        .expect_err("Blank required field should be rejected");
    assert!(matches!(err, ApiError::Validation(_)));

    assert_eq!(
        count_businesses_with_email(&ctx.db_pool, "blank@x.com").await,
        0
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn uploaded_document_is_stored_and_path_recorded(ctx: &TestHarness) {
    let deps = ctx.deps();

    let document = UploadedDocument {
        file_name: "statement.pdf".to_string(),
        bytes: b"%PDF-1.4 test".to_vec(),
    };

    let business = register_business(
        sample_business_input("Uploady", "upload@x.com"),
        Some(document),
        &deps,
    )
    .await
    .expect("Submission with upload should succeed");

    let path = business
        .financial_documents
        .expect("Document path should be recorded");
    assert!(path.starts_with("/uploads/"));
    assert!(path.ends_with(".pdf"));

    // The file landed in the upload directory
    let file_name = path.trim_start_matches("/uploads/");
    let on_disk = std::path::Path::new(&deps.upload_dir).join(file_name);
    let contents = tokio::fs::read(&on_disk)
        .await
        .expect("Uploaded file should exist on disk");
    assert_eq!(contents, b"%PDF-1.4 test");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn submission_without_document_leaves_field_empty(ctx: &TestHarness) {
    let deps = ctx.deps();

    let business = submit_test_business(&deps, "NoDocs", "nodocs@x.com")
        .await
        .expect("Failed to submit business");

    assert!(business.financial_documents.is_none());
}
