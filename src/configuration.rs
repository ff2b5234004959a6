use crate::domain::application::models::email::MailSettings;
use secrecy::Secret;
use serde_aux::field_attributes::{deserialize_bool_from_anything, deserialize_number_from_string};
use std::time::Duration;

/// Plain environment variables the site was first deployed with. When set
/// they win over every other source.
const LEGACY_VARIABLES: [(&str, &str); 4] = [
    ("GMAIL_USER", "email_client.sender_email"),
    ("GMAIL_APP_PASSWORD", "email_client.sender_password"),
    ("DESTINATION_EMAIL", "email_client.destination_email"),
    ("ALLOWED_ORIGINS", "application.allowed_origins"),
];
const LEGACY_DEBUG_VARIABLE: &str = "DEBUG_ERRORS";

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub log_level: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub debug_errors: bool,
    /// Comma-separated origins allowed on top of the deployed host and the
    /// local development servers.
    #[serde(default)]
    pub allowed_origins: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_payload_bytes: usize,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct EmailClientSettings {
    pub smtp_host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub smtp_port: u16,
    #[serde(default)]
    pub sender_email: String,
    pub sender_password: Secret<String>,
    #[serde(default)]
    pub destination_email: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn mail_settings(&self) -> MailSettings {
        MailSettings {
            sender: self.sender_email.clone(),
            credential: self.sender_password.clone(),
            destination: self.destination_email.clone(),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut settings = config::Config::default();
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    // e.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    for (variable, key) in LEGACY_VARIABLES {
        if let Ok(value) = std::env::var(variable) {
            settings.set(key, value)?;
        }
    }
    if let Ok(value) = std::env::var(LEGACY_DEBUG_VARIABLE) {
        settings.set("application.debug_errors", value.eq_ignore_ascii_case("true"))?;
    }

    settings.try_into()
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
