//! Human readable landing page listing the API surface.

use actix_web::{HttpResponse, get, http::header, web};

use crate::domain::to_iso8601;
use crate::inbound::http::state::HttpState;

const ENDPOINTS: [(&str, &str, &str); 6] = [
    ("GET", "/api/health", "Health check"),
    ("GET", "/api/users", "List users"),
    ("GET", "/api/users/{id}", "Fetch one user"),
    ("POST", "/api/users", "Create a user"),
    ("PUT", "/api/users/{id}", "Update a user"),
    ("DELETE", "/api/users/{id}", "Delete a user"),
];

fn render(server_time: &str) -> String {
    let rows: String = ENDPOINTS
        .iter()
        .map(|(method, path, summary)| {
            format!(
                "<li><strong>{method}</strong> <code>{path}</code> {summary}</li>\n"
            )
        })
        .collect();
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>User Profile REST API</title></head>\n<body>\n\
         <h1>User Profile REST API</h1>\n\
         <p>Server time: {server_time}</p>\n\
         <ul>\n{rows}</ul>\n\
         </body>\n</html>\n"
    )
}

/// Serve the landing page.
#[utoipa::path(
    get,
    path = "/",
    tags = ["meta"],
    responses((status = 200, description = "HTML index of endpoints", body = String, content_type = "text/html")),
    operation_id = "index"
)]
#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
        .body(render(&to_iso8601(state.clock.utc())))
}
