//! App wiring shared by the HTTP integration tests.
//!
//! Mirrors the production middleware stack over a fresh in-memory store and
//! a clock frozen at 2023-01-15T10:30:00Z.

use std::sync::Arc;

use actix_cors::Cors;
use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::HeaderMap;
use actix_web::{App, test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use profile_api::Trace;
use profile_api::domain::UserDirectoryService;
use profile_api::inbound::http::health::HealthState;
use profile_api::inbound::http::index::index;
use profile_api::inbound::http::state::HttpState;
use profile_api::inbound::http::{api_scope, not_found};
use profile_api::outbound::memory::InMemoryUserRepository;
use serde_json::Value;

pub const FIXTURE_TIME: &str = "2023-01-15T10:30:00Z";

pub type Directory = UserDirectoryService<InMemoryUserRepository>;

struct FixtureClock(DateTime<Utc>);

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock(
        Utc.with_ymd_and_hms(2023, 1, 15, 10, 30, 0)
            .single()
            .expect("valid fixture timestamp"),
    ))
}

/// Fresh directory over an empty store.
pub fn directory() -> Arc<Directory> {
    Arc::new(UserDirectoryService::new(
        Arc::new(InMemoryUserRepository::new()),
        fixture_clock(),
    ))
}

/// Full application over `directory`, ready for traffic.
pub async fn init_app(
    directory: Arc<Directory>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    let health = HealthState::new();
    health.mark_ready();
    test::init_service(
        App::new()
            .app_data(web::Data::new(health))
            .app_data(web::Data::new(HttpState::new(directory, fixture_clock())))
            .wrap(Cors::default().allow_any_origin().allow_any_method().allow_any_header())
            .wrap(Trace)
            .service(index)
            .service(api_scope())
            .default_service(web::to(not_found)),
    )
    .await
}

/// Captured response.
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub text: String,
}

/// Send `req` and capture status, headers and body.
pub async fn send<S, B>(app: &S, req: Request) -> Reply
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(app, req).await;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = test::read_body(response).await;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    Reply {
        status,
        headers,
        body,
        text,
    }
}

/// Assert the uniform error envelope.
pub fn assert_envelope(reply: &Reply, status: StatusCode, category: &str, message: &str) {
    assert_eq!(reply.status, status, "unexpected status; body: {}", reply.text);
    let object = reply.body.as_object().expect("error body is an object");
    assert_eq!(object.len(), 4, "envelope has exactly four fields");
    assert_eq!(reply.body["error"], category);
    assert_eq!(reply.body["message"], message);
    assert_eq!(reply.body["status_code"], status.as_u16());
    assert_eq!(reply.body["timestamp"].as_str().map(|t| t.ends_with('Z')), Some(true));
}
