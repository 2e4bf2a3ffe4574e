mod emailjs_mailer;
mod smtp_mailer;

pub use emailjs_mailer::{EmailJsConfig, EmailJsMailer};
pub use smtp_mailer::{Mailer, SmtpConfig, SmtpContactMailer};
