use crate::configuration::ApplicationSettings;
use crate::domain::application::ports::ApplicationService;
use crate::inbound::http::cors::AllowedOrigins;
use crate::inbound::http::handlers::{health_check, send_application};
use crate::inbound::http::state::SharedApplicationState;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub mod cors;
mod errors;
mod handlers;
pub mod state;
mod utils;

pub struct Application {
    port: u16,
    server: Server,
}

fn run<AS: ApplicationService>(
    listener: TcpListener,
    application_state: SharedApplicationState<AS>,
) -> Result<Server, std::io::Error> {
    let application_state = web::Data::new(application_state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::route().to(health_check))
            .route("/.netlify/functions/health", web::route().to(health_check))
            .app_data(application_state.clone())
            .route("/send-application", web::route().to(send_application::<AS>))
            .route(
                "/.netlify/functions/send-application",
                web::route().to(send_application::<AS>),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}

impl Application {
    pub async fn build<AS: ApplicationService>(
        application_service: AS,
        configuration: ApplicationSettings,
    ) -> Result<Self, std::io::Error> {
        let address = format!("{}:{}", configuration.host, configuration.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let allowed_origins = AllowedOrigins::parse(&configuration.allowed_origins);
        tracing::info!(
            port,
            debug_errors = configuration.debug_errors,
            allowed_origins = ?allowed_origins,
            "Starting enrollment relay"
        );
        let application_state = SharedApplicationState::new(
            application_service,
            allowed_origins,
            configuration.debug_errors,
            configuration.max_payload_bytes,
        );

        let server: Server = run(listener, application_state)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
