use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    HeaderValue, CONTENT_TYPE, HOST, ORIGIN, VARY,
};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder};

use crate::inbound::http::utils::{header_value, JSON_CONTENT_TYPE};

const LOCAL_DEVELOPMENT_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:5173",
    // netlify dev
    "http://localhost:8888",
];

/// Origins allowed on top of the deployed host and local development servers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    /// Parses a comma-separated list, ignoring blank entries.
    pub fn parse(list: &str) -> Self {
        Self(
            list.split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// A request without an `Origin` is not a browser CORS request and is
    /// let through. An `Origin` that is not visible ASCII never matches.
    pub fn permits(&self, request_origin: &RequestOrigin<'_>) -> bool {
        if request_origin.unreadable_origin.is_some() {
            return false;
        }
        let origin = match request_origin.origin {
            Some(origin) => origin,
            None => return true,
        };
        if let Some(host) = request_origin.host {
            if origin == format!("https://{}", host) || origin == format!("http://{}", host) {
                return true;
            }
        }
        LOCAL_DEVELOPMENT_ORIGINS.contains(&origin) || self.0.iter().any(|o| o == origin)
    }
}

/// The `Origin` and `Host` a request was received with. Empty values count
/// as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOrigin<'a> {
    origin: Option<&'a str>,
    unreadable_origin: Option<&'a HeaderValue>,
    host: Option<&'a str>,
}

impl<'a> RequestOrigin<'a> {
    pub fn new(origin: Option<&'a str>, host: Option<&'a str>) -> Self {
        Self {
            origin: origin.filter(|o| !o.is_empty()),
            unreadable_origin: None,
            host: host.filter(|h| !h.is_empty()),
        }
    }

    pub fn from_request(request: &'a HttpRequest) -> Self {
        let unreadable_origin = request
            .headers()
            .get(ORIGIN)
            .filter(|value| value.to_str().is_err());
        Self {
            unreadable_origin,
            ..Self::new(header_value(request, ORIGIN), header_value(request, HOST))
        }
    }

    pub fn origin(&self) -> Option<&'a str> {
        self.origin
    }

    /// Starts a JSON response carrying the CORS headers. The origin is
    /// reflected verbatim, even when it was rejected.
    pub fn response(&self, status: StatusCode) -> HttpResponseBuilder {
        let mut builder = HttpResponse::build(status);
        builder
            .insert_header((ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
            .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
            .insert_header((VARY, "Origin"))
            .insert_header((CONTENT_TYPE, JSON_CONTENT_TYPE));
        if let Some(origin) = self.origin {
            builder.insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, origin));
        } else if let Some(raw) = self.unreadable_origin {
            builder.insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, raw.clone()));
        }
        builder
    }
}
