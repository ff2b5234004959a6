use actix_web::http::header::CONTENT_TYPE;
use actix_web::{HttpRequest, HttpResponse};

use crate::domain::health::HealthReport;
use crate::inbound::http::utils::JSON_CONTENT_TYPE;

/// Answers every method with the same liveness payload.
pub async fn health_check(request: HttpRequest) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, JSON_CONTENT_TYPE))
        .json(HealthReport::now(request.method().as_str()))
}
