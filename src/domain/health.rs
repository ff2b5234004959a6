use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Liveness payload served by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub ok: bool,
    pub method: String,
    pub now: String,
}

impl HealthReport {
    pub fn now(method: &str) -> Self {
        Self {
            ok: true,
            method: method.to_string(),
            now: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// What the site footer shows after its single health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Online,
    Offline,
}

impl ServiceStatus {
    pub fn from_status_code(status_code: u16) -> Self {
        if status_code == 200 {
            ServiceStatus::Online
        } else {
            ServiceStatus::Offline
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Online => "Operational",
            ServiceStatus::Offline => "Issues",
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
