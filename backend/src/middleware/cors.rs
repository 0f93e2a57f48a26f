//! Cross-origin resource sharing policy.
//!
//! Every method and request header is allowed and credentials are
//! supported; only the origin list comes from settings. With
//! [`CorsOrigins::Any`] the caller's `Origin` is echoed back, which keeps
//! credentialed requests valid.

use actix_cors::Cors;

use crate::settings::CorsOrigins;

/// How long browsers may cache a preflight answer.
const PREFLIGHT_MAX_AGE_SECS: usize = 600;

/// Build the CORS middleware for `origins`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::middleware::cors_policy;
/// use backend::settings::CorsOrigins;
///
/// let _app = App::new().wrap(cors_policy(&CorsOrigins::Any));
/// ```
pub fn cors_policy(origins: &CorsOrigins) -> Cors {
    let policy = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(PREFLIGHT_MAX_AGE_SECS);
    match origins {
        CorsOrigins::Any => policy.allow_any_origin(),
        CorsOrigins::List(list) => list
            .iter()
            .fold(policy, |policy, origin| policy.allowed_origin(origin)),
    }
}
