use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::error::ServiceError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactForm {
    #[schema(example = "Pat Doe")]
    pub name: String,
    #[schema(example = "pat@example.com", format = "email")]
    pub email: String,
    #[schema(example = "2175550123", nullable = true)]
    pub phone: Option<String>,
    #[schema(example = "We'd like a demo for 40 employees.")]
    pub message: String,
}

/// Forwards marketing-site contact requests to the configured endpoint.
#[derive(Clone)]
pub struct ContactClient {
    client: Client,
    url: String,
}

impl ContactClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub async fn submit(&self, form: &ContactForm) -> Result<(), ServiceError> {
        if form.email.trim().is_empty() || form.message.trim().is_empty() {
            return Err(ServiceError::Validation(
                "Email and message are required".into(),
            ));
        }

        let result = self
            .client
            .post(&self.url)
            .json(form)
            .send()
            .await
            .and_then(|r| r.error_for_status());

        match result {
            Ok(_) => {
                info!(email = %form.email, "Contact request forwarded");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Contact request failed");
                Err(ServiceError::Upstream(
                    "Could not send your message, please try again later".into(),
                ))
            }
        }
    }
}
