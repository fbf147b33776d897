use serde::{Deserialize, Serialize};

/// Outbound message payload for the SendGrid v3 mail send endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MailSendRequest {
    pub personalizations: Vec<Personalization>,
    pub from: EmailAddress,
    pub subject: String,
    pub content: Vec<MailContent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Personalization {
    pub to: Vec<EmailAddress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MailContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

/// Error body returned by the provider on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct MailErrorResponse {
    pub errors: Vec<MailError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailError {
    pub message: String,
    #[serde(default)]
    pub field: Option<String>,
}
