//! Runs the footer's health check once and prints the status label.
//!
//! Usage: `status [BASE_URL]`. Without an argument the configured
//! `application.base_url` is probed. Exits with 1 when the service is offline.
use anyhow::Context;
use enrollment_relay::configuration::get_configuration;
use enrollment_relay::domain::health::ServiceStatus;
use enrollment_relay::outbound::status_probe::StatusProbe;
use enrollment_relay::outbound::telemetry::init_logger;
use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration")?;
    init_logger("status", &configuration.log_level, std::io::stderr);

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or(configuration.application.base_url);
    let status = StatusProbe::new(base_url, PROBE_TIMEOUT)?.check().await;
    println!("{}", status);

    if status == ServiceStatus::Offline {
        std::process::exit(1);
    }
    Ok(())
}
