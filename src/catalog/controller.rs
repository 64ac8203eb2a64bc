use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{Map, Value};
use tower_http::services::{ServeDir, ServeFile};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, parse_json_body, ServerError};

pub const OBJECT_BODY_REQUIRED_MSG: &str = "Request body must be a JSON object.";

// routes of the book registry, anything unmatched is looked up in the static directory
pub fn router(state: AppState) -> Router {
    let index_page = ServeFile::new(state.config.index_page.as_str());
    let static_dir = ServeDir::new(state.config.static_dir.as_str());
    Router::new()
        .route_service("/", index_page)
        .route("/books", get(find_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .fallback_service(static_dir)
        .with_state(state)
}

async fn build_service(state: AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.store_lock).await
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    // any json that is not an object carries none of the required fields
    let fields = match parse_json_body(&body)? {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };
    let req: AddBookCommandRequest = serde_json::from_value(Value::Object(fields)).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn find_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let svc = build_service(state).await;
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    body: Bytes) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let fields = match parse_json_body(&body)? {
        Value::Object(fields) => fields,
        _ => return Err(ServerError::new(StatusCode::BAD_REQUEST, OBJECT_BODY_REQUIRED_MSG)),
    };
    let req = UpdateBookCommandRequest::new(book_id.as_str(), fields);
    let svc = build_service(state).await;
    let res = UpdateBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let svc = build_service(state).await;
    let res = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
