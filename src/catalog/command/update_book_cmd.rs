use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UpdateBookCommandRequest {
    pub book_id: String,
    pub fields: Map<String, Value>,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, fields: Map<String, Value>) -> Self {
        Self {
            book_id: book_id.to_string(),
            fields,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookEntity,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.book_id.as_str(), &req.fields)
            .await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
