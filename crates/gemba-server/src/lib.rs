//! # gemba-server
//!
//! JSON API for Gemba audit records over `tiny_http`.
//!
//! The surface matches the original audit service:
//!
//! - `GET /api/health` — liveness probe
//! - `GET /api/audits` — all audits, newest first
//! - `POST /api/audits` — create from a submission body
//! - `DELETE /api/audits/:id` — delete by id
//!
//! `tiny_http::Server::recv` blocks, so the accept loop runs each receive in
//! `spawn_blocking` and handles the request on the async side where the
//! store lives. One request at a time is plenty for this workload.

pub mod error;
pub mod router;

use std::io::Read;
use std::sync::Arc;

use gemba_db::AuditStore;

use error::ServerError;
use router::{ApiResponse, respond, route};

/// Run the API server until the process is stopped.
///
/// `frontend_origin` is echoed in CORS headers so the dashboard UI can call
/// the API from its own origin.
///
/// # Errors
///
/// Returns `ServerError` if the socket cannot be bound or the accept task
/// dies. Per-request failures are answered with JSON error bodies instead.
pub async fn serve(
    store: AuditStore,
    addr: &str,
    frontend_origin: &str,
) -> Result<(), ServerError> {
    let server = tiny_http::Server::http(addr).map_err(|e| ServerError::Bind {
        addr: addr.to_string(),
        reason: e.to_string(),
    })?;
    let server = Arc::new(server);
    tracing::info!(%addr, "audit API listening");

    loop {
        let accept = Arc::clone(&server);
        let received = tokio::task::spawn_blocking(move || receive(&accept))
            .await
            .map_err(|e| ServerError::Accept(e.to_string()))?;
        let Some((request, body)) = received else {
            continue;
        };

        let matched = route(&request.method().to_string(), request.url());
        tracing::debug!(method = %request.method(), url = request.url(), "request");
        let api_response = respond(&store, matched, &body).await;

        let response = to_http_response(&api_response, frontend_origin);
        tokio::task::spawn_blocking(move || {
            if let Err(error) = request.respond(response) {
                tracing::warn!(%error, "failed to write response");
            }
        })
        .await
        .map_err(|e| ServerError::Accept(e.to_string()))?;
    }
}

/// Block for the next request and drain its body.
fn receive(server: &tiny_http::Server) -> Option<(tiny_http::Request, String)> {
    match server.recv() {
        Ok(mut request) => {
            let mut body = String::new();
            if let Err(error) = request.as_reader().read_to_string(&mut body) {
                tracing::warn!(%error, "failed to read request body");
                return None;
            }
            Some((request, body))
        }
        Err(error) => {
            tracing::warn!(%error, "recv error");
            None
        }
    }
}

fn to_http_response(api: &ApiResponse, frontend_origin: &str) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let body = if api.body.is_null() {
        String::new()
    } else {
        api.body.to_string()
    };

    let mut response = tiny_http::Response::from_string(body)
        .with_status_code(api.status)
        .with_header(
            tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
        )
        .with_header(
            tiny_http::Header::from_bytes("Access-Control-Allow-Origin", frontend_origin).unwrap(),
        )
        .with_header(
            tiny_http::Header::from_bytes(
                "Access-Control-Allow-Methods",
                "GET, POST, DELETE, OPTIONS",
            )
            .unwrap(),
        );
    response.add_header(
        tiny_http::Header::from_bytes("Access-Control-Allow-Headers", "Content-Type").unwrap(),
    );
    response
}
