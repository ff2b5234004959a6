use actix_web::http::header::HeaderName;
use actix_web::HttpRequest;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Case-insensitive header lookup. Values that are not visible ASCII read
/// as absent.
pub fn header_value(request: &HttpRequest, name: HeaderName) -> Option<&str> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}
