use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    #[serde(flatten)]
    pub(crate) book: BookDto,
}

impl AddBookCommandRequest {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use serde_json::json;
    use tempfile::TempDir;
    use tokio::sync::Mutex;
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref STORE_DIR: TempDir = tempfile::tempdir().expect("temp dir");
        static ref SUT_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let path = STORE_DIR.path().join("books.json");
                let config = Configuration::new("test").with_data_file(path.to_str().expect("utf8 path"));
                let svc = factory::create_catalog_service(&config, Arc::new(Mutex::new(()))).await;
                AddBookCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = SUT_CMD.get().await;

        let book = BookDto::new("add_1", "test book", "author", "genre", json!(2000), json!(3));
        let res = cmd.execute(AddBookCommandRequest::new(book.clone()))
            .await.expect("should add book");
        assert_eq!(json!({
            "book_id": "add_1", "title": "test book", "author": "author", "genre": "genre", "year": 2000, "copies": 3
        }), serde_json::to_value(&res).expect("should serialize"));
    }

    #[tokio::test]
    async fn test_should_not_add_duplicate_book() {
        let cmd = SUT_CMD.get().await;

        let book = BookDto::new("add_2", "test book", "author", "genre", json!(2000), json!(3));
        let _ = cmd.execute(AddBookCommandRequest::new(book.clone())).await.expect("should add book");
        let res = cmd.execute(AddBookCommandRequest::new(book)).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_not_add_incomplete_book() {
        let cmd = SUT_CMD.get().await;

        let req: AddBookCommandRequest = serde_json::from_value(json!({"book_id": "add_3", "title": "T"}))
            .expect("should parse");
        let res = cmd.execute(req).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
