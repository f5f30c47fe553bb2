//! CORS policy - the API is open to every origin.

use actix_cors::Cors;

/// Allow any origin, method and header; preflight responses are cached for an hour.
pub fn permissive() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
