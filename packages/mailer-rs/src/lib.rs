// https://docs.sendgrid.com/api-reference/mail-send/mail-send

pub mod models;

use reqwest::{header, Client};

use crate::models::{
    EmailAddress, MailContent, MailErrorResponse, MailSendRequest, Personalization,
};

#[derive(Debug, Clone)]
pub struct MailerOptions {
    pub api_key: String,
    pub from_email: String,
    pub from_name: String,
}

#[derive(Debug, Clone)]
pub struct MailerService {
    options: MailerOptions,
}

impl MailerService {
    pub fn new(options: MailerOptions) -> Self {
        Self { options }
    }

    pub async fn send(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), &'static str> {
        let url = "https://api.sendgrid.com/v3/mail/send";

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "Content-Type",
            "application/json"
                .parse()
                .expect("Header value should parse correctly"),
        );

        let payload = MailSendRequest {
            personalizations: vec![Personalization {
                to: vec![EmailAddress {
                    email: recipient.to_string(),
                    name: None,
                }],
            }],
            from: EmailAddress {
                email: self.options.from_email.clone(),
                name: Some(self.options.from_name.clone()),
            },
            subject: subject.to_string(),
            content: vec![MailContent {
                content_type: "text/plain".to_string(),
                value: body.to_string(),
            }],
        };

        let client = Client::new();
        let res = client
            .post(url)
            .bearer_auth(&self.options.api_key)
            .headers(headers)
            .json(&payload)
            .send()
            .await;

        match res {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    // Log the error response from the provider
                    let error_body = response.text().await.unwrap_or_default();
                    if let Ok(parsed) = serde_json::from_str::<MailErrorResponse>(&error_body) {
                        for err in &parsed.errors {
                            eprintln!("Mail provider error ({}): {}", status, err.message);
                        }
                    } else {
                        eprintln!("Mail provider error ({}): {}", status, error_body);
                    }
                    return Err("Mail provider returned an error");
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Request to mail provider failed: {}", e);
                Err("Error sending mail")
            }
        }
    }
}
