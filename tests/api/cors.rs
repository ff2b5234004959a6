use crate::helpers::{spawn_app, spawn_app_with, valid_application, TestSettings};
use reqwest::header::HeaderValue;
use reqwest::Method;

fn assert_cors_headers(response: &reqwest::Response, origin: Option<&str>) {
    let headers = response.headers();
    assert_eq!(headers["Access-Control-Allow-Methods"], "POST, OPTIONS");
    assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
    assert_eq!(headers["Vary"], "Origin");
    match origin {
        Some(origin) => assert_eq!(headers["Access-Control-Allow-Origin"], origin),
        None => assert!(headers.get("Access-Control-Allow-Origin").is_none()),
    }
}

#[tokio::test]
async fn preflight_from_a_local_dev_server_is_answered_with_an_empty_200() {
    let app = spawn_app().await;

    let response = app
        .application_request(Method::OPTIONS, Some("http://localhost:5173"))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_cors_headers(&response, Some("http://localhost:5173"));
    assert_eq!(response.text().await.unwrap(), "");
    assert!(app.notifier.sent().is_empty());
}

#[tokio::test]
async fn preflight_from_a_foreign_origin_is_forbidden() {
    let app = spawn_app().await;

    let response = app
        .application_request(Method::OPTIONS, Some("https://evil.example"))
        .await;

    assert_eq!(response.status().as_u16(), 403);
    assert_cors_headers(&response, Some("https://evil.example"));
}

#[tokio::test]
async fn post_from_a_foreign_origin_is_forbidden() {
    let app = spawn_app().await;

    let response = app
        .post_application(&valid_application(), Some("https://evil.example"))
        .await;

    assert_eq!(response.status().as_u16(), 403);
    assert_cors_headers(&response, Some("https://evil.example"));
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "error": "Forbidden: Invalid Origin" })
    );
    assert!(app.notifier.sent().is_empty());
}

#[tokio::test]
async fn origin_gate_runs_before_the_method_gate() {
    let app = spawn_app().await;

    let response = app
        .application_request(Method::GET, Some("https://evil.example"))
        .await;

    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn requests_without_origin_are_allowed() {
    let app = spawn_app().await;

    let response = app.post_application(&valid_application(), None).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_cors_headers(&response, None);
}

#[tokio::test]
async fn same_host_origin_is_allowed() {
    let app = spawn_app().await;
    let origin = app.same_origin();

    let response = app.post_application(&valid_application(), Some(&origin)).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_cors_headers(&response, Some(&origin));
}

#[tokio::test]
async fn configured_origins_are_allowed() {
    let app = spawn_app_with(TestSettings {
        allowed_origins: "https://www.partner.example, https://school.example".into(),
        ..TestSettings::default()
    })
    .await;

    for origin in ["https://www.partner.example", "https://school.example"] {
        let response = app.post_application(&valid_application(), Some(origin)).await;

        assert_eq!(response.status().as_u16(), 200, "{} was rejected", origin);
        assert_cors_headers(&response, Some(origin));
    }
    assert_eq!(app.notifier.sent().len(), 2);
}

#[tokio::test]
async fn error_responses_carry_cors_headers() {
    let app = spawn_app().await;

    let response = app
        .post_application(
            &serde_json::json!({ "pdfBase64": "not-a-pdf" }),
            Some("http://localhost:3000"),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_cors_headers(&response, Some("http://localhost:3000"));

    let response = app
        .application_request(Method::PUT, Some("http://localhost:8888"))
        .await;

    assert_eq!(response.status().as_u16(), 405);
    assert_cors_headers(&response, Some("http://localhost:8888"));
}

#[tokio::test]
async fn unreadable_origin_is_forbidden() {
    let app = spawn_app().await;
    let origin = HeaderValue::from_bytes(b"https://\xe9cole.example").unwrap();

    let response = app
        .api_client
        .post(&format!("{}/send-application", &app.address))
        .header("Origin", origin.clone())
        .json(&valid_application())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(response.headers()["Access-Control-Allow-Origin"], origin);
    assert!(app.notifier.sent().is_empty());
}

#[tokio::test]
async fn oversized_payloads_are_rejected_with_a_readable_413() {
    let app = spawn_app_with(TestSettings {
        max_payload_bytes: 1024,
        ..TestSettings::default()
    })
    .await;
    let mut body = valid_application();
    body["studentName"] = "x".repeat(4096).into();

    let response = app
        .post_application(&body, Some("http://localhost:5173"))
        .await;

    assert_eq!(response.status().as_u16(), 413);
    assert_cors_headers(&response, Some("http://localhost:5173"));
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Payload Too Large" }));
    assert!(app.notifier.sent().is_empty());
}
