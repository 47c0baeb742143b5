//! Contact form submission: the wire types shared by the browser form and the
//! `/api/contact` route, plus the pieces each side builds on them.

pub mod client;
pub mod form;
#[cfg(feature = "ssr")]
pub mod handler;
#[cfg(feature = "ssr")]
pub mod mail;
#[cfg(feature = "ssr")]
pub mod settings;

use serde::{Deserialize, Serialize};

pub const CONTACT_PATH: &str = "/api/contact";

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and message are required.";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send email.";
pub const SENT_MESSAGE: &str = "Emails sent successfully!";

/// One contact form payload.
///
/// Absent fields deserialize to empty values so a missing `name` and an empty
/// `name` are rejected the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    pub message: String,
}

impl ContactRequest {
    /// `name`, `email` and `message` are all non-empty.
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    /// The project type as it appears in the notification email.
    pub fn project_type_or_default(&self) -> &str {
        match self.project_type.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Not specified",
        }
    }
}

/// Body of a successful `/api/contact` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self {
            message: SENT_MESSAGE.to_string(),
        }
    }
}

/// Body of a failed `/api/contact` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let req: ContactRequest = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(req.name, "A");
        assert!(req.email.is_empty());
        assert!(req.message.is_empty());
        assert_eq!(req.project_type, None);
        assert!(!req.has_required_fields());
    }

    #[test]
    fn test_project_type_uses_camel_case_key() {
        let req: ContactRequest = serde_json::from_str(
            r#"{"name":"A","email":"a@b.com","projectType":"ai-ml","message":"hi"}"#,
        )
        .unwrap();
        assert!(req.has_required_fields());
        assert_eq!(req.project_type_or_default(), "ai-ml");

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["projectType"], "ai-ml");
    }

    #[test]
    fn test_project_type_default() {
        let mut req = ContactRequest {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            project_type: None,
            message: "hi".to_string(),
        };
        assert_eq!(req.project_type_or_default(), "Not specified");
        req.project_type = Some(String::new());
        assert_eq!(req.project_type_or_default(), "Not specified");
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let req = ContactRequest {
            name: " ".to_string(),
            email: "a@b.com".to_string(),
            project_type: None,
            message: "hi".to_string(),
        };
        assert!(req.has_required_fields());
    }
}
