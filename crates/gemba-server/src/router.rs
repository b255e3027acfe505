//! Route matching and request handling.
//!
//! `route` is a pure function from method and path to a [`Route`], and
//! `respond` turns a route plus body into an [`ApiResponse`], so the whole
//! API surface is unit-testable without opening a socket. The accept loop in
//! `lib.rs` only shuttles bytes.

use chrono::Utc;
use serde_json::{Value, json};

use gemba_core::wire::{CreateAuditRequest, DeleteResponse, ErrorResponse, HealthResponse};
use gemba_db::AuditStore;
use gemba_db::error::DatabaseError;

/// A matched API route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Health,
    ListAudits,
    CreateAudit,
    DeleteAudit(String),
    Preflight,
    Unknown,
}

/// Status code plus JSON body, independent of the HTTP library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok<T: serde::Serialize>(status: u16, body: &T) -> Self {
        Self {
            status,
            body: serde_json::to_value(body).unwrap_or(Value::Null),
        }
    }

    fn error(status: u16, response: &ErrorResponse) -> Self {
        Self::ok(status, response)
    }
}

/// Match a method and URL (query string ignored) to a route.
#[must_use]
pub fn route(method: &str, url: &str) -> Route {
    let path = url.split('?').next().unwrap_or(url);
    let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);

    if method.eq_ignore_ascii_case("OPTIONS") {
        return Route::Preflight;
    }

    match (method, path) {
        ("GET", "/api/health") => Route::Health,
        ("GET", "/api/audits") => Route::ListAudits,
        ("POST", "/api/audits") => Route::CreateAudit,
        ("DELETE", _) => match path.strip_prefix("/api/audits/") {
            Some(id) if !id.is_empty() && !id.contains('/') => {
                Route::DeleteAudit(id.to_string())
            }
            _ => Route::Unknown,
        },
        _ => Route::Unknown,
    }
}

/// Execute a route against the store and produce the response.
///
/// Failure classes stay distinguishable for clients: field validation is 400
/// with a `fields` list, a missing record is 404, anything else is 500.
pub async fn respond(store: &AuditStore, route: Route, body: &str) -> ApiResponse {
    match route {
        Route::Health => ApiResponse::ok(
            200,
            &HealthResponse {
                status: String::from("OK"),
                message: String::from("audit API running"),
                timestamp: Utc::now(),
            },
        ),
        Route::ListAudits => match store.list_audits(None).await {
            Ok(audits) => ApiResponse::ok(200, &audits),
            Err(error) => internal(&error),
        },
        Route::CreateAudit => create(store, body).await,
        Route::DeleteAudit(id) => delete(store, &id).await,
        Route::Preflight => ApiResponse {
            status: 204,
            body: Value::Null,
        },
        Route::Unknown => ApiResponse::error(404, &ErrorResponse::message("not found")),
    }
}

async fn create(store: &AuditStore, body: &str) -> ApiResponse {
    let request: CreateAuditRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(error) => {
            return ApiResponse::error(
                400,
                &ErrorResponse::message(format!("invalid request body: {error}")),
            );
        }
    };

    match store.create_audit(&request).await {
        Ok(audit) => ApiResponse::ok(201, &audit),
        Err(DatabaseError::Validation(errors)) => {
            ApiResponse::error(400, &ErrorResponse::validation(errors))
        }
        Err(error) => internal(&error),
    }
}

async fn delete(store: &AuditStore, id: &str) -> ApiResponse {
    match store.delete_audit(id).await {
        Ok(()) => ApiResponse::ok(
            200,
            &DeleteResponse {
                success: true,
                message: String::from("audit deleted"),
            },
        ),
        Err(DatabaseError::NotFound { id }) => {
            ApiResponse::error(404, &ErrorResponse::message(format!("audit not found: {id}")))
        }
        Err(error) => internal(&error),
    }
}

fn internal(error: &DatabaseError) -> ApiResponse {
    tracing::error!(%error, "request failed");
    ApiResponse {
        status: 500,
        body: json!({ "error": "internal server error" }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use gemba_core::entities::Responsible;
    use gemba_core::wire::CreateAuditRequest;
    use gemba_db::AuditStore;

    use super::{ApiResponse, Route, respond, route};

    async fn test_store() -> AuditStore {
        AuditStore::new_local(":memory:").await.unwrap()
    }

    fn submission() -> CreateAuditRequest {
        CreateAuditRequest {
            scores: vec![4.0, 5.0, 3.0, 4.0, 5.0],
            notes: None,
            average: None,
            responsible: Responsible {
                name: String::from("Ana"),
                surname: None,
                document: None,
                role: String::from("QA lead"),
                area: None,
                email: None,
            },
        }
    }

    #[test]
    fn routes_match_the_original_api() {
        assert_eq!(route("GET", "/api/health"), Route::Health);
        assert_eq!(route("GET", "/api/audits"), Route::ListAudits);
        assert_eq!(route("GET", "/api/audits/"), Route::ListAudits);
        assert_eq!(route("POST", "/api/audits"), Route::CreateAudit);
        assert_eq!(
            route("DELETE", "/api/audits/aud-a3f8b2c1"),
            Route::DeleteAudit(String::from("aud-a3f8b2c1"))
        );
        assert_eq!(route("OPTIONS", "/api/audits"), Route::Preflight);
        assert_eq!(route("GET", "/api/unknown"), Route::Unknown);
        assert_eq!(route("DELETE", "/api/audits/"), Route::Unknown);
        assert_eq!(route("PUT", "/api/audits"), Route::Unknown);
    }

    #[test]
    fn query_strings_are_ignored_when_routing() {
        assert_eq!(route("GET", "/api/audits?window=7d"), Route::ListAudits);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let store = test_store().await;
        let response = respond(&store, Route::Health, "").await;
        assert_eq!(response.status, 200);
        assert_eq!(response.body["status"], "OK");
    }

    #[tokio::test]
    async fn create_then_list_then_delete() {
        let store = test_store().await;
        let body = serde_json::to_string(&submission()).unwrap();

        let created = respond(&store, Route::CreateAudit, &body).await;
        assert_eq!(created.status, 201);
        assert_eq!(created.body["average"], 4.2);
        let id = created.body["id"].as_str().unwrap().to_string();

        let listed = respond(&store, Route::ListAudits, "").await;
        assert_eq!(listed.status, 200);
        assert_eq!(listed.body.as_array().unwrap().len(), 1);

        let deleted = respond(&store, Route::DeleteAudit(id.clone()), "").await;
        assert_eq!(deleted.status, 200);
        assert_eq!(deleted.body["success"], true);

        let again = respond(&store, Route::DeleteAudit(id), "").await;
        assert_eq!(again.status, 404);
    }

    #[tokio::test]
    async fn create_rejects_bad_json_as_400() {
        let store = test_store().await;
        let response = respond(&store, Route::CreateAudit, "{not json").await;
        assert_eq!(response.status, 400);
        assert!(response.body["error"].as_str().unwrap().contains("invalid request body"));
    }

    #[tokio::test]
    async fn create_returns_field_errors_for_invalid_submission() {
        let store = test_store().await;
        let mut request = submission();
        request.scores = vec![4.0, 5.0, 3.0, 4.0, 6.0];
        let body = serde_json::to_string(&request).unwrap();

        let response = respond(&store, Route::CreateAudit, &body).await;
        assert_eq!(response.status, 400);
        let fields = response.body["fields"]["errors"].as_array().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0]["field"], "scores[4]");
    }

    #[tokio::test]
    async fn create_rejects_out_of_range_client_average() {
        let store = test_store().await;
        let mut request = submission();
        request.average = Some(9.0);
        let body = serde_json::to_string(&request).unwrap();

        let response = respond(&store, Route::CreateAudit, &body).await;
        assert_eq!(response.status, 400);
    }

    #[tokio::test]
    async fn unknown_route_is_404_json() {
        let store = test_store().await;
        let response = respond(&store, Route::Unknown, "").await;
        assert_eq!(
            response,
            ApiResponse {
                status: 404,
                body: serde_json::json!({ "error": "not found" }),
            }
        );
    }
}
