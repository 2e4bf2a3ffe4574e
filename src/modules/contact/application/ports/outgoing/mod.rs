mod contact_mailer;

pub use contact_mailer::{ContactMailer, MailerError};
