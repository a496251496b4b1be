//! HTTP server for the matrix API.
//!
//! # API Endpoints
//!
//! | Method | Path        | Description                             |
//! |--------|-------------|-----------------------------------------|
//! | GET    | `/health`   | Health check and route list             |
//! | GET    | `/logs`     | SSE stream of request logs              |
//! | POST   | `/echo`     | Matrix as uploaded                      |
//! | POST   | `/invert`   | Transposed matrix                       |
//! | POST   | `/flatten`  | All elements on one row                 |
//! | POST   | `/sum`      | Sum of elements                         |
//! | POST   | `/multiply` | Product of elements                     |
//!
//! Matrix routes take `multipart/form-data` with a `file` part and answer in
//! plain text. They are routed for every method; anything but POST gets the
//! plain-text method rejection.

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, FromRequest, Multipart, Request, State},
    http::{header, Method, StatusCode},
    response::{sse::Event, IntoResponse, Json, Response, Sse},
    routing::{any, get},
    Router,
};
use futures::stream::Stream;
use std::{convert::Infallible, sync::Arc, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use super::logs::{log_info, log_info_indent, LogEntry, LOG_BROADCASTER};
use super::types::HealthResponse;
use crate::config::ServerConfig;
use crate::error::{MatrixError, ServerError};
use crate::transform::pipeline::{run_validations, UploadRequest, UploadedFile};
use crate::transform::Operation;

/// Shared, read-only server state
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router.
pub fn build_router(config: ServerConfig) -> Router {
    let body_limit = config.max_upload_bytes;
    let state = AppState::new(config);

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let mut router: Router<AppState> = Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/logs", get(sse_logs));

    for operation in Operation::ALL {
        router = router.route(
            operation.path(),
            any(move |State(state): State<AppState>, request: Request| {
                handle_operation(operation, state, request)
            }),
        );
    }

    router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let limit = config.max_upload_bytes;
    let app = build_router(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    log_info(format!("🚀 Matrix server running on http://{}", addr));
    for operation in Operation::ALL {
        log_info_indent(
            format!("POST {:<10} - {}", operation.path(), operation.description()),
            1,
        );
    }
    log_info_indent("GET  /logs       - SSE log stream", 1);
    log_info_indent("GET  /health     - Health check", 1);
    log_info_indent(format!("Upload limit: {} bytes", limit), 1);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// Shared handler behind every matrix route
async fn handle_operation(operation: Operation, state: AppState, request: Request) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let upload = match read_upload(request, &state).await {
        Ok(upload) => upload,
        Err(err) => return reject(&request_id, operation, err),
    };

    if let Some(file) = &upload.file {
        LOG_BROADCASTER.log(
            LogEntry::info(format!(
                "📄 {} {} ({} bytes)",
                operation.path(),
                file.filename,
                file.bytes.len()
            ))
            .with_request(request_id.as_str()),
        );
    }

    match run_validations(&upload) {
        Ok(matrix) => {
            let result = operation.apply(&matrix);
            LOG_BROADCASTER.log(
                LogEntry::success(format!(
                    "{} on {} x {} matrix",
                    operation,
                    matrix.dimension(),
                    matrix.dimension()
                ))
                .with_request(request_id.as_str()),
            );
            result.into_response()
        }
        Err(err) => reject(&request_id, operation, err),
    }
}

fn reject(request_id: &str, operation: Operation, err: MatrixError) -> Response {
    LOG_BROADCASTER.log(
        LogEntry::warning(format!("{} rejected: {}", operation.path(), err)).with_request(request_id),
    );
    err.into_response()
}

/// Turn an HTTP request into an [`UploadRequest`].
///
/// Only a part named `file` that carries a filename counts as the upload.
/// Bodies that are not multipart at all simply have no file.
async fn read_upload(request: Request, state: &AppState) -> Result<UploadRequest, MatrixError> {
    let method = request.method().as_str().to_string();
    if *request.method() != Method::POST {
        return Ok(UploadRequest::new(method, None));
    }

    let Ok(mut multipart) = Multipart::from_request(request, state).await else {
        return Ok(UploadRequest::new(method, None));
    };

    let limit = state.config.max_upload_bytes;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, limit))?
    {
        if file.is_some() || field.name() != Some("file") {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field.bytes().await.map_err(|e| upload_error(e, limit))?;
        file = Some(UploadedFile::new(filename, bytes.to_vec()));
    }

    Ok(UploadRequest::new(method, file))
}

fn upload_error(err: MultipartError, limit: usize) -> MatrixError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        MatrixError::UploadTooLarge { limit }
    } else {
        MatrixError::MissingFile
    }
}
