use crate::{
    domain::application::{models::submission::Submission, ports::ApplicationService},
    inbound::http::{cors::RequestOrigin, errors::AppError, state::SharedApplicationState},
};
use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use anyhow::Context;
use futures::StreamExt;

#[tracing::instrument(
    name = "Receiving an enrollment application",
    skip(request, payload, state),
    fields(
        http_method = %request.method(),
        origin = tracing::field::Empty,
    )
)]
pub async fn send_application<AS: ApplicationService>(
    request: HttpRequest,
    payload: web::Payload,
    state: web::Data<SharedApplicationState<AS>>,
) -> HttpResponse {
    let request_origin = RequestOrigin::from_request(&request);
    if let Some(origin) = request_origin.origin() {
        tracing::Span::current().record("origin", &origin);
    }

    match relay_application(&request, &request_origin, payload, &state).await {
        Ok(response) => response,
        Err(e) => {
            match &e {
                AppError::Unexpected(_) => {
                    tracing::error!(error.cause_chain = ?e, "Failed to relay the application")
                }
                _ => tracing::warn!(error.message = %e, "Rejected the application request"),
            }
            e.error_response(&request_origin, state.debug_errors())
        }
    }
}

async fn relay_application<AS: ApplicationService>(
    request: &HttpRequest,
    request_origin: &RequestOrigin<'_>,
    payload: web::Payload,
    state: &SharedApplicationState<AS>,
) -> Result<HttpResponse, AppError> {
    if !state.allowed_origins().permits(request_origin) {
        return Err(AppError::ForbiddenOrigin);
    }
    if request.method() == Method::OPTIONS {
        return Ok(request_origin.response(StatusCode::OK).finish());
    }
    if request.method() != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let body = read_body(payload, state.max_payload_bytes()).await?;
    let submission =
        Submission::from_body(&body).context("Failed to parse the application payload")?;
    state.application_service().submit(submission).await?;

    Ok(request_origin
        .response(StatusCode::OK)
        .json(serde_json::json!({ "message": "Application sent successfully." })))
}

/// Collects the request body, giving up once it grows past `limit` bytes.
async fn read_body(mut payload: web::Payload, limit: usize) -> Result<web::BytesMut, AppError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk =
            chunk.map_err(|e| anyhow::anyhow!("Failed to read the application payload: {}", e))?;
        if body.len() + chunk.len() > limit {
            return Err(AppError::PayloadTooLarge);
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
