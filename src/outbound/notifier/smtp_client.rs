use crate::configuration::EmailClientSettings;
use crate::domain::application::{
    models::email::{ApplicationEmail, PdfAttachment},
    ports::{ApplicationNotifier, NotifierError},
};
use anyhow::Context;
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use secrecy::ExposeSecret;

/// Relays applications through an authenticated SMTP account over TLS.
#[derive(Clone)]
pub struct SmtpClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpClient {
    pub fn new(configuration: &EmailClientSettings) -> Result<Self, anyhow::Error> {
        let credentials = Credentials::new(
            configuration.sender_email.clone(),
            configuration.sender_password.expose_secret().clone(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&configuration.smtp_host)
            .with_context(|| format!("Failed to configure SMTP relay {}", configuration.smtp_host))?
            .port(configuration.smtp_port)
            .credentials(credentials)
            .timeout(Some(configuration.timeout()))
            .build();

        Ok(Self { transport })
    }
}

impl std::fmt::Debug for SmtpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpClient").finish_non_exhaustive()
    }
}

#[async_trait]
impl ApplicationNotifier for SmtpClient {
    #[tracing::instrument(
        name = "Send an enrollment application email",
        skip(self, email),
        fields(
            attachment = %email.attachment.filename,
            attachment_bytes = email.attachment.document.len(),
            has_reply_to = email.reply_to.is_some(),
        )
    )]
    async fn send_application(&self, email: &ApplicationEmail) -> Result<(), NotifierError> {
        let message = build_message(email)?;
        self.transport
            .send(message)
            .await
            .context("Failed to deliver the application email")?;

        tracing::info!("Application email delivered");
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifierError> {
    address
        .parse()
        .map_err(|e| NotifierError::InvalidAddress(format!("{}: {}", address, e)))
}

/// Plain-text body followed by the PDF as a `multipart/mixed` message.
fn build_message(email: &ApplicationEmail) -> Result<Message, NotifierError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(&email.from)?)
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject.as_ref());
    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(parse_mailbox(reply_to.as_ref())?);
    }

    let content_type = ContentType::parse(PdfAttachment::CONTENT_TYPE)
        .map_err(|e| anyhow::anyhow!("Invalid attachment content type: {}", e))?;
    let attachment = Attachment::new(email.attachment.filename.as_ref().to_string()).body(
        email.attachment.document.as_bytes().to_vec(),
        content_type,
    );

    let message = builder
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(email.text_body.clone()))
                .singlepart(attachment),
        )
        .context("Failed to build the application email")?;
    Ok(message)
}
