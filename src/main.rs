use anyhow::Context;
use enrollment_relay::configuration::get_configuration;
use enrollment_relay::domain::application::service::Enrollment;
use enrollment_relay::inbound::http::Application;
use enrollment_relay::outbound::notifier::smtp_client::SmtpClient;
use enrollment_relay::outbound::telemetry::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration")?;
    init_logger("enrollment-relay", &configuration.log_level, std::io::stdout);

    let smtp_client = SmtpClient::new(&configuration.email_client)?;
    let application_service =
        Enrollment::new(smtp_client, configuration.email_client.mail_settings());
    let application = Application::build(application_service, configuration.application).await?;

    application.run_until_stopped().await?;
    Ok(())
}
