use async_trait::async_trait;
use serde_json::{Map, Value};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

pub const FIELDS_REQUIRED_MSG: &str = "All fields are required.";

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookEntity> {
        let missing = book.missing_fields();
        if !missing.is_empty() {
            return Err(LibraryError::validation(FIELDS_REQUIRED_MSG, Some(missing.join(","))));
        }
        let entity = BookEntity::from(book);
        let _ = self.book_repository.create(&entity).await?;
        tracing::info!(branch = %self.branch_id, book_id = %book.book_id, "book added");
        Ok(entity)
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        let _ = self.book_repository.delete(id).await?;
        tracing::info!(branch = %self.branch_id, book_id = id, "book removed");
        Ok(())
    }

    // no revalidation here, a merge may blank out required fields
    async fn update_book(&self, id: &str, fields: &Map<String, Value>) -> LibraryResult<BookEntity> {
        let book = self.book_repository.update(id, fields).await?;
        tracing::info!(branch = %self.branch_id, book_id = id, fields = fields.len(), "book updated");
        Ok(book)
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookEntity> {
        tracing::debug!(book_id = id, "finding book");
        self.book_repository.get(id).await
    }

    async fn find_books(&self) -> LibraryResult<Vec<BookEntity>> {
        self.book_repository.find_all().await
    }
}
