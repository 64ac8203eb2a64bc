pub mod service;

use async_trait::async_trait;
use serde_json::{Map, Value};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookEntity>;
    async fn remove_book(&self, id: &str) -> LibraryResult<()>;
    async fn update_book(&self, id: &str, fields: &Map<String, Value>) -> LibraryResult<BookEntity>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookEntity>;
    async fn find_books(&self) -> LibraryResult<Vec<BookEntity>>;
}
