use std::time::Duration;

use super::ContactRequest;

/// How long a finished submission's status stays on screen.
pub const RESET_DELAY: Duration = Duration::from_millis(5000);

pub const SENDING_MESSAGE: &str = "Sending your message...";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! Check your email for confirmation.";
pub const REJECTED_FALLBACK_MESSAGE: &str = "Failed to send message. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading(String),
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn message(&self) -> &str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Loading(s) | FormStatus::Success(s) | FormStatus::Error(s) => s,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, FormStatus::Idle)
    }

    pub fn banner_class(&self) -> &'static str {
        match self {
            FormStatus::Success(_) => "bg-green/10 border-green/30 text-green",
            FormStatus::Error(_) => "bg-red/10 border-red/30 text-red",
            FormStatus::Idle | FormStatus::Loading(_) => "bg-blue/10 border-blue/30 text-blue",
        }
    }
}

/// The four editable values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

impl ContactFields {
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            project_type: (!self.project_type.is_empty()).then(|| self.project_type.clone()),
            message: self.message.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// What came back from one POST to the contact route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx with a JSON body.
    Delivered,
    /// Non-2xx; carries the server's `error` text when it sent one.
    Rejected(Option<String>),
    /// No response, or a body that wasn't JSON.
    NetworkFailure,
}

/// Identifies the submission a pending response or reset timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

/// Client-side state of the contact form.
///
/// Every submission bumps a generation counter and hands out a
/// [`SubmitTicket`]. Completions and the delayed reset only apply while their
/// ticket is still the newest, so a timer left over from an earlier
/// submission can never wipe the status of a later one.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    status: FormStatus,
    generation: u64,
}

impl ContactForm {
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.status, FormStatus::Loading(_))
    }

    pub fn begin_submit(&mut self) -> (SubmitTicket, ContactRequest) {
        self.generation += 1;
        self.status = FormStatus::Loading(SENDING_MESSAGE.to_string());
        (SubmitTicket(self.generation), self.fields.to_request())
    }

    /// Apply the outcome of the submission `ticket` was issued for.
    /// Returns false if a newer submission has started since.
    pub fn complete(&mut self, ticket: SubmitTicket, outcome: SubmitOutcome) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = match outcome {
            SubmitOutcome::Delivered => {
                self.fields.clear();
                FormStatus::Success(SUCCESS_MESSAGE.to_string())
            }
            SubmitOutcome::Rejected(Some(msg)) if !msg.is_empty() => FormStatus::Error(msg),
            SubmitOutcome::Rejected(_) => FormStatus::Error(REJECTED_FALLBACK_MESSAGE.to_string()),
            SubmitOutcome::NetworkFailure => FormStatus::Error(NETWORK_ERROR_MESSAGE.to_string()),
        };
        true
    }

    /// Reset to idle once [`RESET_DELAY`] has passed for `ticket`.
    /// Stale tickets are ignored.
    pub fn expire(&mut self, ticket: SubmitTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = FormStatus::Idle;
        true
    }

    fn is_current(&self, ticket: SubmitTicket) -> bool {
        ticket.0 == self.generation
    }
}
