use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub const BOOK_DELETED_MSG: &str = "Book deleted successfully.";

pub(crate) struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub message: String,
}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {
            message: BOOK_DELETED_MSG.to_string(),
        }
    }
}

impl Default for RemoveBookCommandResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
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
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref STORE_DIR: TempDir = tempfile::tempdir().expect("temp dir");
        static ref STORE_LOCK: Arc<Mutex<()>> = Arc::new(Mutex::new(()));
        static ref ADD_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&test_config(), STORE_LOCK.clone()).await;
                AddBookCommand::new(svc)
            });
        static ref REMOVE_CMD : AsyncOnce<RemoveBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&test_config(), STORE_LOCK.clone()).await;
                RemoveBookCommand::new(svc)
            });
    }

    fn test_config() -> Configuration {
        let path = STORE_DIR.path().join("books.json");
        Configuration::new("test").with_data_file(path.to_str().expect("utf8 path"))
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let add_cmd = ADD_CMD.get().await;
        let remove_cmd = REMOVE_CMD.get().await;

        let book = BookDto::new("remove_1", "test book", "author", "genre", json!(2000), json!(3));
        let _ = add_cmd.execute(AddBookCommandRequest::new(book))
            .await.expect("should add book");
        let res = remove_cmd.execute(RemoveBookCommandRequest::new("remove_1".to_string())).await.expect("should remove book");
        assert_eq!("Book deleted successfully.", res.message.as_str());
    }

    #[tokio::test]
    async fn test_should_default_to_confirmation() {
        let res = RemoveBookCommandResponse::default();
        assert_eq!("Book deleted successfully.", res.message.as_str());
    }

    #[tokio::test]
    async fn test_should_not_remove_missing_book() {
        let remove_cmd = REMOVE_CMD.get().await;

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("remove_missing".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
