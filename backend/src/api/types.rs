//! HTTP response types.
//!
//! Matrix routes answer in plain text, both on success and on rejection.
//! Only the service endpoints (`/health`) speak JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::models::OperationResult;
use crate::transform::Operation;

/// Response body of `/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Every route the service answers
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
    pub description: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        let mut endpoints: Vec<EndpointInfo> = Operation::ALL
            .iter()
            .map(|op| EndpointInfo {
                method: "POST".to_string(),
                path: op.path().to_string(),
                description: op.description().to_string(),
            })
            .collect();
        endpoints.push(EndpointInfo {
            method: "GET".to_string(),
            path: "/logs".to_string(),
            description: "Server-Sent Events log stream".to_string(),
        });

        Self {
            status: "ok".to_string(),
            service: "csv-matrix".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints,
        }
    }
}

impl IntoResponse for MatrixError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
        (status, self.to_string()).into_response()
    }
}

impl IntoResponse for OperationResult {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.render()).into_response()
    }
}
