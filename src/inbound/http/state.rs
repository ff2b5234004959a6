use crate::domain::application::ports::ApplicationService;
use crate::inbound::http::cors::AllowedOrigins;
use std::sync::Arc;

#[derive(Debug)]
pub struct ApplicationState<AS: ApplicationService> {
    application_service: AS,
    allowed_origins: AllowedOrigins,
    debug_errors: bool,
    max_payload_bytes: usize,
}

#[derive(Debug)]
pub struct SharedApplicationState<AS: ApplicationService>(Arc<ApplicationState<AS>>);

impl<AS: ApplicationService> SharedApplicationState<AS> {
    pub fn new(
        application_service: AS,
        allowed_origins: AllowedOrigins,
        debug_errors: bool,
        max_payload_bytes: usize,
    ) -> Self {
        Self(Arc::new(ApplicationState {
            application_service,
            allowed_origins,
            debug_errors,
            max_payload_bytes,
        }))
    }

    pub fn application_service(&self) -> &AS {
        &self.0.application_service
    }

    pub fn allowed_origins(&self) -> &AllowedOrigins {
        &self.0.allowed_origins
    }

    pub fn debug_errors(&self) -> bool {
        self.0.debug_errors
    }

    pub fn max_payload_bytes(&self) -> usize {
        self.0.max_payload_bytes
    }
}

impl<AS: ApplicationService> Clone for SharedApplicationState<AS> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
