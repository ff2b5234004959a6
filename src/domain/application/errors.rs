use super::{models::document::DocumentError, ports::NotifierError};

#[derive(thiserror::Error, Debug)]
pub enum ApplicationError {
    #[error("Invalid application document: {0}")]
    InvalidDocument(#[from] DocumentError),
    #[error("Mail settings are incomplete")]
    MissingSettings,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<NotifierError> for ApplicationError {
    fn from(error: NotifierError) -> Self {
        match error {
            NotifierError::Unexpected(e) => ApplicationError::Unexpected(e),
            NotifierError::InvalidAddress(_) => ApplicationError::Unexpected(error.into()),
        }
    }
}
