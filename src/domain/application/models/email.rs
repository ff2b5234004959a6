use super::{attachment::AttachmentName, document::PdfDocument};
use secrecy::{ExposeSecret, Secret};

pub const APPLICATION_TEXT_BODY: &str = "A new enrollment application has been submitted from the website. \
The attached PDF contains the completed enrollment form.";

/// Address the school replies to. Anything containing an `@` is taken as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTo(String);

impl ReplyTo {
    pub fn parse(candidate: Option<&str>) -> Option<ReplyTo> {
        candidate
            .filter(|email| email.contains('@'))
            .map(|email| Self(email.to_string()))
    }
}

impl AsRef<str> for ReplyTo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSubject(String);

impl EmailSubject {
    const PREFIX: &'static str = "New Course Enrollment Application";

    pub fn for_student(student_name: Option<&str>) -> EmailSubject {
        match student_name {
            Some(name) if !name.is_empty() => Self(format!("{} — {}", EmailSubject::PREFIX, name)),
            _ => Self(EmailSubject::PREFIX.to_string()),
        }
    }
}

impl AsRef<str> for EmailSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfAttachment {
    pub filename: AttachmentName,
    pub document: PdfDocument,
}

impl PdfAttachment {
    pub const CONTENT_TYPE: &'static str = "application/pdf";
}

/// Everything the mail transport needs to relay one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationEmail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<ReplyTo>,
    pub subject: EmailSubject,
    pub text_body: String,
    pub attachment: PdfAttachment,
}

/// Sender account and destination mailbox. Any of them may be left empty
/// at startup; emptiness is reported per request.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub sender: String,
    pub credential: Secret<String>,
    pub destination: String,
}

impl MailSettings {
    pub fn is_complete(&self) -> bool {
        !self.sender.is_empty()
            && !self.credential.expose_secret().is_empty()
            && !self.destination.is_empty()
    }
}
