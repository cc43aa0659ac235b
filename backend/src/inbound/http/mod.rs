//! HTTP inbound adapter exposing the REST endpoints.

use actix_web::{Scope, web};

use crate::domain::Error;

pub mod error;
pub mod health;
pub mod index;
mod payload;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::{ApiResult, ErrorEnvelope};

/// Every `/api` route.
///
/// Needs `web::Data<HttpState>` and, for the health probe,
/// `web::Data<HealthState>` registered on the app.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use profile_api::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(health::health)
        .service(users::list_users)
        .service(users::create_user)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
}

/// Fallback for requests no route matched.
pub async fn not_found() -> ApiResult<actix_web::HttpResponse> {
    Err(Error::resource_not_found())
}
