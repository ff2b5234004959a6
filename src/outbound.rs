pub mod notifier;
pub mod status_probe;
pub mod telemetry;
