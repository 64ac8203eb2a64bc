use std::sync::Arc;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
    // serializes load-modify-store sequences against the store file of this process
    pub store_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        AppState {
            config,
            store_lock: Arc::new(Mutex::new(())),
        }
    }
}

// MessageResponse is the json body for errors and confirmations
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}

#[derive(Debug)]
pub struct ServerError {
    pub status: StatusCode,
    pub message: String,
}

impl ServerError {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self { status, message: message.to_string() }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::new(self.message.as_str()))).into_response()
    }
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ServerError::new(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

// an empty body reads as an empty object, anything else must be valid json
pub fn parse_json_body(body: &Bytes) -> Result<Value, ServerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).map_err(json_to_server_error)
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CommandError::DuplicateKey { .. } => StatusCode::CONFLICT,
            CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommandError::Runtime { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CommandError::Serialization { .. } => StatusCode::BAD_REQUEST,
            CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
        };
        ServerError::new(status, err.message())
    }
}
