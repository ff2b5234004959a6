use async_trait::async_trait;

use super::{
    errors::ApplicationError,
    models::{
        attachment::AttachmentName,
        document::{DocumentError, PdfDocument},
        email::{
            ApplicationEmail, EmailSubject, MailSettings, PdfAttachment, ReplyTo,
            APPLICATION_TEXT_BODY,
        },
        submission::Submission,
    },
    ports::{ApplicationNotifier, ApplicationService},
};

#[derive(Debug)]
pub struct Enrollment<N>
where
    N: ApplicationNotifier,
{
    notifier: N,
    settings: MailSettings,
}

impl<N> Enrollment<N>
where
    N: ApplicationNotifier,
{
    pub fn new(notifier: N, settings: MailSettings) -> Self {
        Self { notifier, settings }
    }
}

#[async_trait]
impl<N> ApplicationService for Enrollment<N>
where
    N: ApplicationNotifier,
{
    #[tracing::instrument(
        name = "Relaying an enrollment application",
        skip(self, submission),
        fields(
            student_name = ?submission.student_name,
            file_name = ?submission.file_name,
            document_bytes = tracing::field::Empty,
        )
    )]
    async fn submit(&self, submission: Submission) -> Result<(), ApplicationError> {
        let encoded = submission.pdf_base64.ok_or(DocumentError::Missing)?;
        let document = PdfDocument::parse(&encoded)?;
        tracing::Span::current().record("document_bytes", &document.len());

        if !self.settings.is_complete() {
            return Err(ApplicationError::MissingSettings);
        }

        let email = ApplicationEmail {
            from: self.settings.sender.clone(),
            to: self.settings.destination.clone(),
            reply_to: ReplyTo::parse(submission.student_email.as_deref()),
            subject: EmailSubject::for_student(submission.student_name.as_deref()),
            text_body: APPLICATION_TEXT_BODY.to_string(),
            attachment: PdfAttachment {
                filename: AttachmentName::parse(submission.file_name.as_deref()),
                document,
            },
        };
        self.notifier.send_application(&email).await?;

        Ok(())
    }
}
