use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use thiserror::Error;

use super::mail::{confirmation_email, notification_email, MailError, Mailer};
use super::settings::ContactSettings;
use super::{
    ContactErrorBody, ContactRequest, ContactResponse, CONTACT_PATH, REQUIRED_FIELDS_MESSAGE,
    SEND_FAILED_MESSAGE,
};

/// Everything the contact route needs, built once by the hosting process.
#[derive(Clone)]
pub struct ContactState {
    pub mailer: Arc<dyn Mailer>,
    pub settings: Arc<ContactSettings>,
}

impl ContactState {
    pub fn new(mailer: Arc<dyn Mailer>, settings: ContactSettings) -> Self {
        Self {
            mailer,
            settings: Arc::new(settings),
        }
    }
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("{}", REQUIRED_FIELDS_MESSAGE)]
    MissingFields,
    #[error("{0} is not set")]
    MissingConfig(&'static str),
    #[error("couldn't send notification: {0}")]
    Delivery(#[from] MailError),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ContactError::MissingFields => (StatusCode::BAD_REQUEST, REQUIRED_FIELDS_MESSAGE),
            ContactError::MissingConfig(_) | ContactError::Delivery(_) => {
                tracing::error!("Error sending email: {self}");
                (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED_MESSAGE)
            }
        };
        let body = Json(ContactErrorBody {
            error: error.to_string(),
        });
        (status, body).into_response()
    }
}

/// Routes for the contact form, mergeable into a router of any state.
pub fn router<S>(state: ContactState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(CONTACT_PATH, post(submit_contact))
        .with_state(state)
}

pub async fn submit_contact(
    State(state): State<ContactState>,
    body: Bytes,
) -> Result<Json<ContactResponse>, ContactError> {
    // parsed regardless of content type; an unreadable body can't carry the
    // required fields
    let req = serde_json::from_slice::<ContactRequest>(&body).map_err(|e| {
        tracing::debug!("unreadable contact body: {e}");
        ContactError::MissingFields
    })?;
    deliver(state.mailer.as_ref(), &state.settings, &req).await?;
    Ok(Json(ContactResponse::sent()))
}

/// Validate, notify the owner, then confirm to the submitter.
///
/// Only the notification decides the result. A failed confirmation is logged
/// and otherwise ignored.
pub async fn deliver(
    mailer: &dyn Mailer,
    settings: &ContactSettings,
    req: &ContactRequest,
) -> Result<(), ContactError> {
    if !req.has_required_fields() {
        return Err(ContactError::MissingFields);
    }
    let sender = settings
        .sender
        .as_deref()
        .ok_or(ContactError::MissingConfig("EMAIL_SENDER"))?;
    let recipient = settings
        .recipient
        .as_deref()
        .ok_or(ContactError::MissingConfig("EMAIL_RECIPIENT"))?;

    let sent = mailer
        .send(&notification_email(sender, recipient, req))
        .await?;
    tracing::info!(id = ?sent.id, "contact notification sent");

    match mailer
        .send(&confirmation_email(sender, &settings.owner, req))
        .await
    {
        Ok(sent) => tracing::info!(id = ?sent.id, "confirmation email sent"),
        Err(e) => tracing::warn!("Failed to send confirmation email: {e}"),
    }
    Ok(())
}
