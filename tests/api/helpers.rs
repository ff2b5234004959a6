use async_trait::async_trait;
use enrollment_relay::configuration::get_configuration;
use enrollment_relay::domain::application::{
    models::email::{ApplicationEmail, MailSettings},
    ports::{ApplicationNotifier, NotifierError},
    service::Enrollment,
};
use enrollment_relay::inbound::http::Application;
use enrollment_relay::outbound::telemetry::init_logger;
use once_cell::sync::Lazy;
use secrecy::Secret;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        init_logger(&subscriber_name, &default_filter_level, std::io::stdout);
    } else {
        init_logger(&subscriber_name, &default_filter_level, std::io::sink);
    }
});

/// Stands in for the SMTP relay: records what would have been sent.
#[derive(Clone, Default)]
pub struct FakeNotifier {
    sent: Arc<Mutex<Vec<ApplicationEmail>>>,
    failing: Arc<AtomicBool>,
}

impl FakeNotifier {
    pub fn sent(&self) -> Vec<ApplicationEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail_deliveries(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ApplicationNotifier for FakeNotifier {
    async fn send_application(&self, email: &ApplicationEmail) -> Result<(), NotifierError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotifierError::Unexpected(anyhow::anyhow!(
                "SMTP relay refused the connection"
            )));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

pub struct TestSettings {
    pub mail_settings: MailSettings,
    pub allowed_origins: String,
    pub debug_errors: bool,
    pub max_payload_bytes: usize,
}

impl Default for TestSettings {
    fn default() -> Self {
        Self {
            mail_settings: MailSettings {
                sender: "school@gmail.com".into(),
                credential: Secret::new("app-password".into()),
                destination: "office@school.edu".into(),
            },
            allowed_origins: String::new(),
            debug_errors: false,
            max_payload_bytes: 64 * 1024,
        }
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub notifier: FakeNotifier,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub fn same_origin(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    pub async fn post_application(
        &self,
        body: &serde_json::Value,
        origin: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self
            .api_client
            .post(&format!("{}/send-application", &self.address))
            .json(body);
        if let Some(origin) = origin {
            request = request.header("Origin", origin);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn post_raw_application(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/send-application", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn application_request(
        &self,
        method: reqwest::Method,
        origin: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self
            .api_client
            .request(method, &format!("{}/send-application", &self.address));
        if let Some(origin) = origin {
            request = request.header("Origin", origin);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_health(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn pdf_base64() -> String {
    base64::encode("%PDF-1.7\n1 0 obj\n<<>>\nendobj\n%%EOF")
}

pub fn valid_application() -> serde_json::Value {
    serde_json::json!({
        "pdfBase64": format!("data:application/pdf;base64,{}", pdf_base64()),
        "studentEmail": "ursula_le_guin@example.com",
        "studentName": "Ursula Le Guin",
        "fileName": "Le Guin application.pdf",
    })
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(TestSettings::default()).await
}

pub async fn spawn_app_with(test_settings: TestSettings) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration");
        c.application.port = 0;
        c.application.allowed_origins = test_settings.allowed_origins;
        c.application.debug_errors = test_settings.debug_errors;
        c.application.max_payload_bytes = test_settings.max_payload_bytes;
        c
    };

    let notifier = FakeNotifier::default();
    let application_service = Enrollment::new(notifier.clone(), test_settings.mail_settings);

    let application = Application::build(application_service, configuration.application)
        .await
        .expect("Failed to build application");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://localhost:{}", application_port),
        port: application_port,
        notifier,
        api_client: reqwest::Client::new(),
    }
}
