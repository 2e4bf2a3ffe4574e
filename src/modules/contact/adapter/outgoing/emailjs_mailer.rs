use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use crate::{
    config::{parse_var, require_var, ConfigError},
    contact::application::{
        domain::contact_message::ContactMessage,
        ports::outgoing::{ContactMailer, MailerError},
    },
};

const DEFAULT_API_URL: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    pub api_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Private key, required when the EmailJS account enforces it
    pub access_token: Option<String>,
    pub timeout: Duration,
}

impl EmailJsConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            api_url: lookup("EMAILJS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            service_id: require_var(lookup, "EMAILJS_SERVICE_ID")?,
            template_id: require_var(lookup, "EMAILJS_TEMPLATE_ID")?,
            public_key: require_var(lookup, "EMAILJS_PUBLIC_KEY")?,
            access_token: lookup("EMAILJS_ACCESS_TOKEN").filter(|v| !v.is_empty()),
            timeout: Duration::from_secs(parse_var(lookup, "EMAILJS_TIMEOUT_SECS", 10)?),
        })
    }
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    phone: &'a str,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

/// Sends contact messages through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsMailer {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsMailer {
    pub fn new(config: EmailJsConfig) -> Result<Self, MailerError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), SEND_PATH)
    }

    fn request<'a>(&'a self, message: &'a ContactMessage) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.access_token.as_deref(),
            template_params: TemplateParams {
                name: message.name(),
                email: message.email(),
                subject: message.subject().unwrap_or_default(),
                message: message.message(),
                phone: message.phone().unwrap_or_default(),
            },
        }
    }
}

#[async_trait]
impl ContactMailer for EmailJsMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailerError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&self.request(message))
            .send()
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(MailerError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpResponse, HttpServer};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    fn config(api_url: &str) -> EmailJsConfig {
        EmailJsConfig {
            api_url: api_url.to_string(),
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "public_z".to_string(),
            access_token: None,
            timeout: Duration::from_secs(5),
        }
    }

    fn message() -> ContactMessage {
        ContactMessage::new("Ada", "ada@example.com", None, "Hello there", Some("0812")).unwrap()
    }

    type Captured = Arc<Mutex<Option<Value>>>;

    async fn capture(body: web::Json<Value>, captured: web::Data<Captured>) -> HttpResponse {
        if let Ok(mut slot) = captured.lock() {
            *slot = Some(body.into_inner());
        }
        HttpResponse::Ok().body("OK")
    }

    async fn reject() -> HttpResponse {
        HttpResponse::BadRequest().body("The Public Key is invalid")
    }

    /// Local stand-in for the EmailJS API. Returns its base URL.
    fn start_fake_api(accept: bool, captured: Captured) -> String {
        let server = HttpServer::new(move || {
            let app = App::new().app_data(web::Data::new(captured.clone()));
            if accept {
                app.route(SEND_PATH, web::post().to(capture))
            } else {
                app.route(SEND_PATH, web::post().to(reject))
            }
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        format!("http://{addr}/")
    }

    #[test]
    fn test_request_body_shape() {
        let mut cfg = config(DEFAULT_API_URL);
        cfg.access_token = Some("private".to_string());
        let mailer = EmailJsMailer::new(cfg).unwrap();
        let msg = message();

        let body = serde_json::to_value(mailer.request(&msg)).unwrap();

        assert_eq!(
            body,
            json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "public_z",
                "accessToken": "private",
                "template_params": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "subject": "",
                    "message": "Hello there",
                    "phone": "0812"
                }
            })
        );
    }

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        let mailer = EmailJsMailer::new(config("https://api.emailjs.com/")).unwrap();

        assert_eq!(mailer.endpoint(), "https://api.emailjs.com/api/v1.0/email/send");
    }

    #[actix_web::test]
    async fn test_send_posts_to_api() {
        let captured: Captured = Arc::new(Mutex::new(None));
        let base = start_fake_api(true, captured.clone());
        let mailer = EmailJsMailer::new(config(&base)).unwrap();

        mailer.send(&message()).await.unwrap();

        let body = captured.lock().unwrap().clone().expect("request body");
        assert_eq!(body["template_params"]["message"], "Hello there");
        assert!(body.get("accessToken").is_none());
    }

    #[actix_web::test]
    async fn test_send_rejected_by_api() {
        let base = start_fake_api(false, Arc::new(Mutex::new(None)));
        let mailer = EmailJsMailer::new(config(&base)).unwrap();

        let result = mailer.send(&message()).await;

        match result {
            Err(MailerError::Rejected { status, body }) => {
                assert_eq!(status, 400);
                assert!(body.contains("Public Key"));
            }
            other => panic!("Expected Rejected, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_send_unreachable_api() {
        let mailer = EmailJsMailer::new(config("http://127.0.0.1:1")).unwrap();

        let result = mailer.send(&message()).await;

        assert!(matches!(result, Err(MailerError::Transport(_))));
    }
}
