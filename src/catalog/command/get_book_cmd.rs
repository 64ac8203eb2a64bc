use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct GetBookCommandResponse {
    book: BookEntity,
}

impl GetBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use serde_json::json;
    use tempfile::tempdir;
    use tokio::sync::Mutex;
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_get_book() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("books.json");
        let config = Configuration::new("test").with_data_file(path.to_str().expect("utf8 path"));
        let lock = Arc::new(Mutex::new(()));
        let add_cmd = AddBookCommand::new(factory::create_catalog_service(&config, lock.clone()).await);
        let get_cmd = GetBookCommand::new(factory::create_catalog_service(&config, lock).await);

        let book = BookDto::new("b1", "test book", "author", "genre", json!(1999), json!("two"));
        let _ = add_cmd.execute(AddBookCommandRequest::new(book.clone())).await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new("b1".to_string())).await.expect("should get book");
        assert_eq!(BookEntity::from(&book), loaded.book);

        let res = get_cmd.execute(GetBookCommandRequest::new("b2".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
