// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! HTTP API
//!
//! | Method | Path      | Success | Failure |
//! |--------|-----------|---------|---------|
//! | POST   | `/run`    | 200 `{ok, output}` | 500 `{ok, output}` |
//! | GET    | `/status` | 200 `{ok, state, log}` | 500 `{ok, state, log}` |
//! | any    | other     | -       | 404 `{ok:false, error:"not found"}` |
//!
//! Authentication wraps every request, matched or not, and answers 401
//! `{ok:false, error:"unauthorized"}` before any routing happens.
//!
//! Dispatch goes through [`Route::resolve`] rather than axum's path router
//! so an unknown method on a known path is a 404 like any other miss.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::application::update_control::UpdateControlService;
use crate::domain::auth::BearerAuth;
use crate::domain::envelope::Envelope;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub struct AppState {
    pub service: UpdateControlService,
    pub auth: BearerAuth,
}

impl AppState {
    pub fn new(service: UpdateControlService, auth: BearerAuth) -> Self {
        Self { service, auth }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Trigger,
    Status,
    NotFound,
}

impl Route {
    pub fn resolve(method: &Method, path: &str) -> Self {
        match (method, path) {
            (&Method::POST, "/run") => Route::Trigger,
            (&Method::GET, "/status") => Route::Status,
            _ => Route::NotFound,
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(middleware::from_fn_with_state(state.clone(), require_bearer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn require_bearer(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .map(|value| value.as_bytes());

    if !state.auth.authenticate(authorization) {
        warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected unauthenticated request"
        );
        return ApiReply::new(StatusCode::UNAUTHORIZED, Envelope::unauthorized()).into_response();
    }

    next.run(request).await
}

async fn dispatch(State(state): State<Arc<AppState>>, method: Method, uri: Uri) -> ApiReply {
    match Route::resolve(&method, uri.path()) {
        Route::Trigger => ApiReply::outcome(state.service.trigger().await),
        Route::Status => ApiReply::outcome(state.service.status().await),
        Route::NotFound => ApiReply::new(StatusCode::NOT_FOUND, Envelope::not_found()),
    }
}

/// An envelope paired with the status code it is sent with.
#[derive(Debug)]
pub struct ApiReply {
    pub status: StatusCode,
    pub envelope: Envelope,
}

impl ApiReply {
    pub fn new(status: StatusCode, envelope: Envelope) -> Self {
        Self { status, envelope }
    }

    /// 200 when the collaborators succeeded, 500 otherwise.
    pub fn outcome(envelope: Envelope) -> Self {
        let status = if envelope.ok() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self::new(status, envelope)
    }
}

impl IntoResponse for ApiReply {
    fn into_response(self) -> Response {
        let (status, body) = match serde_json::to_vec(&self.envelope) {
            Ok(body) => (self.status, body),
            Err(e) => {
                error!("Failed to serialize response envelope: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    br#"{"ok":false,"error":"internal error"}"#.to_vec(),
                )
            }
        };

        let content_length = HeaderValue::from(body.len());
        let mut response = (status, body).into_response();
        let headers = response.headers_mut();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(header::CONTENT_LENGTH, content_length);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::process::ProcessResult;
    use crate::domain::unit::UnitSupervisor;
    use async_trait::async_trait;
    use axum::body::Body;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    struct CountingSupervisor {
        start: ProcessResult,
        query: ProcessResult,
        log: ProcessResult,
        calls: AtomicUsize,
    }

    impl CountingSupervisor {
        fn new(start: ProcessResult, query: ProcessResult, log: ProcessResult) -> Arc<Self> {
            Arc::new(Self {
                start,
                query,
                log,
                calls: AtomicUsize::new(0),
            })
        }

        fn succeeding() -> Arc<Self> {
            Self::new(
                ProcessResult::new(0, ""),
                ProcessResult::new(0, "ActiveState=active\nSubState=running\n"),
                ProcessResult::new(0, "Starting update...\n"),
            )
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UnitSupervisor for CountingSupervisor {
        async fn start_unit(&self) -> ProcessResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.start.clone()
        }

        async fn query_unit(&self) -> ProcessResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.query.clone()
        }

        async fn fetch_log(&self, _lines: u32) -> ProcessResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.log.clone()
        }
    }

    fn router(supervisor: Arc<CountingSupervisor>, token: &str) -> Router {
        let service = UpdateControlService::new(supervisor, 200);
        app(Arc::new(AppState::new(service, BearerAuth::new(token))))
    }

    fn request(method: Method, uri: &str, authorization: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn send(router: Router, request: Request) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let declared_length: usize = response.headers()[header::CONTENT_LENGTH]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(declared_length, body.len());
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[test]
    fn test_route_table() {
        assert_eq!(Route::resolve(&Method::POST, "/run"), Route::Trigger);
        assert_eq!(Route::resolve(&Method::GET, "/status"), Route::Status);
        assert_eq!(Route::resolve(&Method::GET, "/run"), Route::NotFound);
        assert_eq!(Route::resolve(&Method::POST, "/status"), Route::NotFound);
        assert_eq!(Route::resolve(&Method::POST, "/run/"), Route::NotFound);
        assert_eq!(Route::resolve(&Method::GET, "/"), Route::NotFound);
    }

    #[tokio::test]
    async fn test_run_success() {
        let supervisor = CountingSupervisor::succeeding();
        let (status, body) = send(
            router(supervisor.clone(), "tok"),
            request(Method::POST, "/run", Some("Bearer tok")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"ok": true, "output": ""}));
        assert_eq!(supervisor.calls(), 1);
    }

    #[tokio::test]
    async fn test_run_failure_is_500() {
        let supervisor = CountingSupervisor::new(
            ProcessResult::new(1, "Job for printer-ui-update.service failed.\n"),
            ProcessResult::new(0, ""),
            ProcessResult::new(0, ""),
        );
        let (status, body) = send(
            router(supervisor, ""),
            request(Method::POST, "/run", None),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({"ok": false, "output": "Job for printer-ui-update.service failed.\n"})
        );
    }

    #[tokio::test]
    async fn test_status_success() {
        let (status, body) = send(
            router(CountingSupervisor::succeeding(), "tok"),
            request(Method::GET, "/status", Some("Bearer tok")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "ok": true,
                "state": "ActiveState=active\nSubState=running\n",
                "log": "Starting update...\n",
            })
        );
    }

    #[tokio::test]
    async fn test_status_partial_failure_is_500() {
        let supervisor = CountingSupervisor::new(
            ProcessResult::new(0, ""),
            ProcessResult::new(0, "ActiveState=failed\n"),
            ProcessResult::unavailable("Failed to execute /bin/journalctl: No such file or directory (os error 2)"),
        );
        let (status, body) = send(
            router(supervisor, ""),
            request(Method::GET, "/status", None),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["ok"], false);
        assert_eq!(body["state"], "ActiveState=failed\n");
        assert_eq!(
            body["log"],
            "Failed to execute /bin/journalctl: No such file or directory (os error 2)"
        );
    }

    #[tokio::test]
    async fn test_unknown_routes_are_404() {
        for (method, uri) in [
            (Method::GET, "/run"),
            (Method::POST, "/status"),
            (Method::DELETE, "/run"),
            (Method::GET, "/health"),
            (Method::PUT, "/"),
        ] {
            let supervisor = CountingSupervisor::succeeding();
            let (status, body) = send(
                router(supervisor.clone(), "tok"),
                request(method, uri, Some("Bearer tok")),
            )
            .await;

            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(body, serde_json::json!({"ok": false, "error": "not found"}));
            assert_eq!(supervisor.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_unauthenticated_requests_never_reach_supervisor() {
        for (method, uri, authorization) in [
            (Method::POST, "/run", None),
            (Method::GET, "/status", Some("Bearer wrong")),
            (Method::GET, "/status", Some("bearer tok")),
            (Method::POST, "/run", Some("Bearer tok ")),
            (Method::GET, "/nowhere", None),
        ] {
            let supervisor = CountingSupervisor::succeeding();
            let (status, body) = send(
                router(supervisor.clone(), "tok"),
                request(method, uri, authorization),
            )
            .await;

            assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {:?}", uri, authorization);
            assert_eq!(body, serde_json::json!({"ok": false, "error": "unauthorized"}));
            assert_eq!(supervisor.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_content_length_counts_utf8_bytes() {
        let supervisor = CountingSupervisor::new(
            ProcessResult::new(0, "Aktualisierung läuft… ✓\n"),
            ProcessResult::new(0, ""),
            ProcessResult::new(0, ""),
        );
        let (status, body) = send(
            router(supervisor, ""),
            request(Method::POST, "/run", None),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["output"], "Aktualisierung läuft… ✓\n");
    }
}
