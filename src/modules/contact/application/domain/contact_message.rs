use email_address::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactMessageError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email format is invalid")]
    InvalidEmail,

    #[error("Message cannot be empty")]
    EmptyMessage,
}

/// A validated submission from the public contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
    phone: Option<String>,
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

fn optional(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

impl ContactMessage {
    pub fn new(
        name: &str,
        email: &str,
        subject: Option<&str>,
        message: &str,
        phone: Option<&str>,
    ) -> Result<Self, ContactMessageError> {
        let name = trimmed(name);
        if name.is_empty() {
            return Err(ContactMessageError::EmptyName);
        }

        let email = trimmed(email);
        if email.is_empty() {
            return Err(ContactMessageError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(ContactMessageError::InvalidEmail);
        }

        let message = trimmed(message);
        if message.is_empty() {
            return Err(ContactMessageError::EmptyMessage);
        }

        Ok(Self {
            name,
            email,
            subject: optional(subject),
            message,
            phone: optional(phone),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}
