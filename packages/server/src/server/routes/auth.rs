//! Auth routes: registration, login, OTP password reset

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::common::ApiError;
use crate::domains::auth::actions::{forgot_password, login, register_user, reset_password};
use crate::domains::auth::AuthPayload;
use crate::server::app::AxumAppState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// POST /auth/register
pub async fn register_handler(
    Extension(state): Extension<AxumAppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthPayload>), ApiError> {
    let payload = register_user(body.name, body.email, body.password, &state.server_deps).await?;
    Ok((StatusCode::CREATED, Json(payload)))
}

/// POST /auth/login
pub async fn login_handler(
    Extension(state): Extension<AxumAppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthPayload>, ApiError> {
    let payload = login(body.email, body.password, &state.server_deps).await?;
    Ok(Json(payload))
}

/// POST /auth/forgot-password
pub async fn forgot_password_handler(
    Extension(state): Extension<AxumAppState>,
    Json(body): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    forgot_password(body.email, &state.server_deps).await?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Reset code sent".to_string(),
    }))
}

/// POST /auth/reset-password
pub async fn reset_password_handler(
    Extension(state): Extension<AxumAppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    reset_password(body.email, body.code, body.new_password, &state.server_deps).await?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Password updated".to_string(),
    }))
}
