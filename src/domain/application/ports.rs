use async_trait::async_trait;

use super::{
    errors::ApplicationError,
    models::{email::ApplicationEmail, submission::Submission},
};

#[async_trait]
pub trait ApplicationService: Send + Sync + 'static {
    /// Validates a submission and relays it by email. Dispatch is attempted
    /// at most once; nothing is retried or deduplicated.
    async fn submit(&self, submission: Submission) -> Result<(), ApplicationError>;
}

#[async_trait]
/// Outbound capability that delivers an application email.
pub trait ApplicationNotifier: Send + Sync + 'static {
    async fn send_application(&self, email: &ApplicationEmail) -> Result<(), NotifierError>;
}

#[derive(thiserror::Error, Debug)]
pub enum NotifierError {
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
