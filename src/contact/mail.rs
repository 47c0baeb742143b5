//! Outbound email: the [`Mailer`] seam, the Resend HTTP client behind it, and
//! the two message templates the contact route sends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::settings::ContactSettings;
use super::ContactRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Provider acknowledgement for an accepted email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SentEmail {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("RESEND_API_KEY is not set")]
    MissingApiKey,
    #[error("email request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("email provider returned HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &Email) -> Result<SentEmail, MailError>;
}

/// Sends through the Resend REST API.
pub struct ResendMailer {
    http: reqwest::Client,
    api_key: Option<String>,
    api_url: String,
}

impl ResendMailer {
    pub fn new(api_key: Option<String>, api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            api_url: api_url.into(),
        }
    }

    pub fn from_settings(settings: &ContactSettings) -> Self {
        Self::new(settings.api_key.clone(), settings.api_url.clone())
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &Email) -> Result<SentEmail, MailError> {
        let api_key = self.api_key.as_deref().ok_or(MailError::MissingApiKey)?;
        let resp = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        match resp.json::<SentEmail>().await {
            Ok(sent) => Ok(sent),
            Err(e) => {
                tracing::debug!("couldn't decode email provider reply: {e}");
                Ok(SentEmail::default())
            }
        }
    }
}

/// Escape text for interpolation into an HTML body.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

/// The message delivered to the site owner.
pub fn notification_email(from: &str, to: &str, req: &ContactRequest) -> Email {
    Email {
        from: from.to_string(),
        to: to.to_string(),
        subject: format!("New Contact Form Submission from {}", req.name),
        html: format!(
            "<h2>New Contact Submission</h2>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Project Type:</strong> {}</p>\n\
             <p><strong>Message:</strong><br/>{}</p>\n",
            escape_html(&req.name),
            escape_html(&req.email),
            escape_html(req.project_type_or_default()),
            escape_html(&req.message),
        ),
        reply_to: Some(req.email.clone()),
    }
}

/// The thank-you message delivered back to the submitter.
pub fn confirmation_email(from: &str, owner: &str, req: &ContactRequest) -> Email {
    let owner_html = escape_html(owner);
    Email {
        from: from.to_string(),
        to: req.email.clone(),
        subject: format!("Thanks for contacting {owner} – Message Received"),
        html: format!(
            "<h2>Hi {},</h2>\n\
             <p>Thank you for reaching out! I've received your message and will get back to you soon.</p>\n\
             <p><strong>Your Message:</strong></p>\n\
             <blockquote>{}</blockquote>\n\
             <p>Best regards,<br/>{owner_html}<br/>Computer Engineer &amp; System Architect</p>\n",
            escape_html(&req.name),
            escape_html(&req.message),
        ),
        reply_to: None,
    }
}
