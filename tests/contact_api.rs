//! Integration tests for `POST /api/contact`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use portfolio_site::contact::handler::{router, ContactState};
use portfolio_site::contact::mail::{Email, MailError, Mailer, SentEmail};
use portfolio_site::contact::settings::ContactSettings;

/// Records every email it is asked to send and fails the ones listed.
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<Email>>,
    fail_notification: bool,
    fail_confirmation: bool,
}

impl RecordingMailer {
    fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &Email) -> Result<SentEmail, MailError> {
        let mut sent = self.sent.lock().unwrap();
        let is_notification = sent.is_empty();
        sent.push(email.clone());
        let fail = if is_notification {
            self.fail_notification
        } else {
            self.fail_confirmation
        };
        if fail {
            return Err(MailError::Rejected {
                status: 500,
                body: "provider down".to_string(),
            });
        }
        Ok(SentEmail {
            id: Some(format!("email_{}", sent.len())),
        })
    }
}

fn configured() -> ContactSettings {
    ContactSettings {
        api_key: Some("re_test".to_string()),
        sender: Some("site@example.com".to_string()),
        recipient: Some("owner@example.com".to_string()),
        ..Default::default()
    }
}

fn build_app(mailer: Arc<RecordingMailer>, settings: ContactSettings) -> Router {
    router(ContactState::new(mailer, settings))
}

async fn post_json(app: Router, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Success
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_submission_sends_both_emails() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = build_app(mailer.clone(), configured());

    let response = post_json(app, r#"{"name":"A","email":"a@b.com","message":"hi"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Emails sent successfully!" })
    );

    let sent = mailer.sent();
    assert_eq!(sent.len(), 2);

    let notification = &sent[0];
    assert_eq!(notification.from, "site@example.com");
    assert_eq!(notification.to, "owner@example.com");
    assert_eq!(notification.subject, "New Contact Form Submission from A");
    assert_eq!(notification.reply_to.as_deref(), Some("a@b.com"));
    assert!(notification.html.contains("Not specified"));

    let confirmation = &sent[1];
    assert_eq!(confirmation.to, "a@b.com");
    assert!(confirmation.html.contains("<blockquote>hi</blockquote>"));
}

#[tokio::test]
async fn project_type_is_included_when_given() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = build_app(mailer.clone(), configured());

    let body = json!({
        "name": "A",
        "email": "a@b.com",
        "projectType": "system-architecture",
        "message": "hi",
    });
    let response = post_json(app, &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = &mailer.sent()[0].html;
    assert!(html.contains("<strong>Project Type:</strong> system-architecture"));
    assert!(!html.contains("Not specified"));
}

#[tokio::test]
async fn markup_in_submission_is_escaped() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = build_app(mailer.clone(), configured());

    let body = json!({
        "name": "<b>Eve</b>",
        "email": "eve@example.com",
        "message": "<script>alert(1)</script>",
    });
    let response = post_json(app, &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::OK);
    for email in mailer.sent() {
        assert!(!email.html.contains("<script>"));
        assert!(!email.html.contains("<b>Eve</b>"));
    }
    assert!(mailer.sent()[0]
        .html
        .contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn body_is_parsed_regardless_of_content_type() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = build_app(mailer.clone(), configured());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(CONTENT_TYPE, "text/plain;charset=UTF-8")
        .body(Body::from(r#"{"name":"A","email":"a@b.com","message":"hi"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Emails sent successfully!" })
    );
    assert_eq!(mailer.sent().len(), 2);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_or_empty_required_fields_return_400() {
    let bodies = [
        json!({ "email": "a@b.com", "message": "hi" }),
        json!({ "name": "", "email": "a@b.com", "message": "hi" }),
        json!({ "name": "A", "message": "hi" }),
        json!({ "name": "A", "email": "", "message": "hi" }),
        json!({ "name": "A", "email": "a@b.com" }),
        json!({ "name": "A", "email": "a@b.com", "message": "" }),
        json!({}),
    ];

    for body in bodies {
        let mailer = Arc::new(RecordingMailer::default());
        let app = build_app(mailer.clone(), configured());
        let response = post_json(app, &body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Name, email, and message are required." })
        );
        assert!(mailer.sent().is_empty());
    }
}

#[tokio::test]
async fn malformed_body_returns_400() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = build_app(mailer.clone(), configured());

    let response = post_json(app, "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Name, email, and message are required."
    );
    assert!(mailer.sent().is_empty());
}

// ---------------------------------------------------------------------------
// Delivery failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_configuration_returns_500() {
    for settings in [
        ContactSettings {
            sender: None,
            ..configured()
        },
        ContactSettings {
            recipient: None,
            ..configured()
        },
    ] {
        let mailer = Arc::new(RecordingMailer::default());
        let app = build_app(mailer.clone(), settings);
        let response = post_json(app, r#"{"name":"A","email":"a@b.com","message":"hi"}"#).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to send email." })
        );
        assert!(mailer.sent().is_empty());
    }
}

#[tokio::test]
async fn notification_failure_returns_500_without_confirmation() {
    let mailer = Arc::new(RecordingMailer {
        fail_notification: true,
        ..Default::default()
    });
    let app = build_app(mailer.clone(), configured());

    let response = post_json(app, r#"{"name":"A","email":"a@b.com","message":"hi"}"#).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Failed to send email." })
    );
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "owner@example.com");
}

#[tokio::test]
async fn confirmation_failure_still_returns_200() {
    let mailer = Arc::new(RecordingMailer {
        fail_confirmation: true,
        ..Default::default()
    });
    let app = build_app(mailer.clone(), configured());

    let response = post_json(app, r#"{"name":"A","email":"a@b.com","message":"hi"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Emails sent successfully!" })
    );
    assert_eq!(mailer.sent().len(), 2);
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = build_app(mailer, configured());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/contact")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Browser client against a live server
// ---------------------------------------------------------------------------

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn client_submission_round_trip() {
    use portfolio_site::contact::client::submit;
    use portfolio_site::contact::form::{ContactForm, FormStatus, SubmitOutcome, SUCCESS_MESSAGE};

    let mailer = Arc::new(RecordingMailer::default());
    let origin = serve(build_app(mailer.clone(), configured())).await;

    let mut form = ContactForm::default();
    form.fields.name = "A".to_string();
    form.fields.email = "a@b.com".to_string();
    form.fields.message = "hi".to_string();

    let (ticket, request) = form.begin_submit();
    let outcome = submit(&origin, &request).await;
    assert_eq!(outcome, SubmitOutcome::Delivered);

    form.complete(ticket, outcome);
    assert_eq!(form.status(), &FormStatus::Success(SUCCESS_MESSAGE.to_string()));
    assert!(form.fields.name.is_empty());
    assert_eq!(mailer.sent().len(), 2);
}

#[tokio::test]
async fn client_surfaces_server_error_text() {
    use portfolio_site::contact::client::submit;
    use portfolio_site::contact::form::SubmitOutcome;
    use portfolio_site::contact::ContactRequest;

    let mailer = Arc::new(RecordingMailer::default());
    let origin = serve(build_app(mailer, configured())).await;

    let outcome = submit(&format!("{origin}/"), &ContactRequest::default()).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(Some("Name, email, and message are required.".to_string()))
    );
}

#[tokio::test]
async fn client_reports_unreachable_server_as_network_failure() {
    use portfolio_site::contact::client::submit;
    use portfolio_site::contact::form::SubmitOutcome;
    use portfolio_site::contact::ContactRequest;

    // bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let outcome = submit(&format!("http://{addr}"), &ContactRequest::default()).await;
    assert_eq!(outcome, SubmitOutcome::NetworkFailure);
}
