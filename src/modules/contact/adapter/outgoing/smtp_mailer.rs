use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{
    config::{parse_var, require_var, ConfigError},
    contact::application::{
        domain::contact_message::ContactMessage,
        ports::outgoing::{ContactMailer, MailerError},
    },
};

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
    pub recipient: String,
    /// Plain connection without TLS, for Mailpit and similar local servers
    pub insecure: bool,
}

impl SmtpConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: require_var(lookup, "SMTP_HOST")?,
            port: parse_var(lookup, "SMTP_PORT", 587)?,
            username: lookup("SMTP_USERNAME").filter(|v| !v.is_empty()),
            password: lookup("SMTP_PASSWORD").filter(|v| !v.is_empty()),
            from: require_var(lookup, "SMTP_FROM")?,
            recipient: require_var(lookup, "CONTACT_RECIPIENT")?,
            insecure: parse_var(lookup, "SMTP_INSECURE", false)?,
        })
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

/// Forwards contact submissions to the site owner's inbox over SMTP.
pub struct SmtpContactMailer {
    mailer: Box<dyn Mailer>,
    from: Mailbox,
    recipient: Mailbox,
}

fn parse_mailbox(value: &str) -> Result<Mailbox, MailerError> {
    value
        .parse::<Mailbox>()
        .map_err(|e| MailerError::InvalidMessage(format!("{value}: {e}")))
}

impl SmtpContactMailer {
    pub fn new_with_mailer(
        mailer: Box<dyn Mailer>,
        from: &str,
        recipient: &str,
    ) -> Result<Self, MailerError> {
        Ok(Self {
            mailer,
            from: parse_mailbox(from)?,
            recipient: parse_mailbox(recipient)?,
        })
    }

    pub fn new(config: &SmtpConfig) -> Result<Self, MailerError> {
        let builder = if config.insecure {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| MailerError::Transport(e.to_string()))?
        };

        let mut builder = builder.port(config.port);
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Self::new_with_mailer(Box::new(builder.build()), &config.from, &config.recipient)
    }

    fn build_message(&self, message: &ContactMessage) -> Result<Message, MailerError> {
        let visitor_address = message
            .email()
            .parse::<Address>()
            .map_err(|e| MailerError::InvalidMessage(e.to_string()))?;
        let visitor = Mailbox::new(Some(message.name().to_string()), visitor_address);

        let subject = match message.subject() {
            Some(subject) => format!("Portfolio contact: {subject}"),
            None => format!("Portfolio contact from {}", message.name()),
        };

        let mut body = format!("Name: {}\nEmail: {}\n", message.name(), message.email());
        if let Some(phone) = message.phone() {
            body.push_str(&format!("Phone: {phone}\n"));
        }
        body.push('\n');
        body.push_str(message.message());

        Message::builder()
            .from(self.from.clone())
            .reply_to(visitor)
            .to(self.recipient.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| MailerError::InvalidMessage(e.to_string()))
    }
}

#[async_trait]
impl ContactMailer for SmtpContactMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailerError> {
        let email = self.build_message(message)?;
        self.mailer.send(email).await.map_err(MailerError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturingMailer {
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Mailer for CapturingMailer {
        async fn send(&self, email: Message) -> Result<(), String> {
            let raw = String::from_utf8_lossy(&email.formatted()).to_string();
            self.sent.lock().unwrap().push(raw);
            Ok(())
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _: Message) -> Result<(), String> {
            Err("connection refused".to_string())
        }
    }

    fn message(subject: Option<&str>) -> ContactMessage {
        ContactMessage::new(
            "Ada Lovelace",
            "ada@example.com",
            subject,
            "Would love to work together.",
            Some("+44 20 7946 0000"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_send_forwards_to_recipient() {
        let capture = CapturingMailer::default();
        let mailer = SmtpContactMailer::new_with_mailer(
            Box::new(capture.clone()),
            "site@example.com",
            "owner@example.com",
        )
        .unwrap();

        mailer.send(&message(Some("Hiring"))).await.unwrap();

        let sent = capture.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let raw = &sent[0];
        assert!(raw.contains("To: owner@example.com"));
        assert!(raw.contains("Reply-To:"));
        assert!(raw.contains("<ada@example.com>"));
        assert!(raw.contains("Subject: Portfolio contact: Hiring"));
        assert!(raw.contains("Phone: +44 20 7946 0000"));
        assert!(raw.contains("Would love to work together."));
    }

    #[tokio::test]
    async fn test_subject_falls_back_to_sender_name() {
        let capture = CapturingMailer::default();
        let mailer = SmtpContactMailer::new_with_mailer(
            Box::new(capture.clone()),
            "site@example.com",
            "owner@example.com",
        )
        .unwrap();

        mailer.send(&message(None)).await.unwrap();

        let sent = capture.sent.lock().unwrap();
        assert!(sent[0].contains("Subject: Portfolio contact from Ada Lovelace"));
    }

    #[test]
    fn test_invalid_recipient_rejected() {
        let result = SmtpContactMailer::new_with_mailer(
            Box::new(CapturingMailer::default()),
            "site@example.com",
            "not-an-email",
        );

        assert!(matches!(result, Err(MailerError::InvalidMessage(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces() {
        let mailer = SmtpContactMailer::new_with_mailer(
            Box::new(FailingMailer),
            "site@example.com",
            "owner@example.com",
        )
        .unwrap();

        let result = mailer.send(&message(None)).await;

        match result {
            Err(MailerError::Transport(msg)) => assert!(msg.contains("connection refused")),
            other => panic!("Expected Transport error, got {:?}", other.err()),
        }
    }
}
