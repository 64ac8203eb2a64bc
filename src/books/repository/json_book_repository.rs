use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::store::{read_records, write_records};

pub const BOOK_EXISTS_MSG: &str = "Book with this ID already exists.";
pub const BOOK_NOT_FOUND_MSG: &str = "Book not found.";

// JsonBookRepository keeps the whole collection in one json file. Every call reloads the
// file and every mutation rewrites it; nothing is cached between calls.
#[derive(Debug)]
pub struct JsonBookRepository {
    data_file: PathBuf,
    store_lock: Arc<Mutex<()>>,
}

impl JsonBookRepository {
    pub(crate) fn new(data_file: &str, store_lock: Arc<Mutex<()>>) -> Self {
        Self {
            data_file: PathBuf::from(data_file),
            store_lock,
        }
    }

    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        read_records(self.data_file.as_path()).await
    }

    async fn save(&self, books: &[BookEntity]) -> LibraryResult<()> {
        write_records(self.data_file.as_path(), books).await
    }
}

#[async_trait]
impl Repository<BookEntity> for JsonBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let _guard = self.store_lock.lock().await;
        let mut books = self.load().await?;
        if books.iter().any(|b| b.same_id(entity)) {
            return Err(LibraryError::duplicate_key(BOOK_EXISTS_MSG));
        }
        books.push(entity.clone());
        self.save(&books).await?;
        Ok(1)
    }

    async fn update(&self, id: &str, fields: &Map<String, Value>) -> LibraryResult<BookEntity> {
        let _guard = self.store_lock.lock().await;
        let mut books = self.load().await?;
        let book = books.iter_mut().find(|b| b.has_id(id))
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND_MSG))?;
        book.merge(fields);
        let updated = book.clone();
        self.save(&books).await?;
        Ok(updated)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let _guard = self.store_lock.lock().await;
        self.load().await?.into_iter().find(|b| b.has_id(id))
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND_MSG))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let _guard = self.store_lock.lock().await;
        let books = self.load().await?;
        let before = books.len();
        let remaining: Vec<BookEntity> = books.into_iter().filter(|b| !b.has_id(id)).collect();
        if remaining.len() == before {
            return Err(LibraryError::not_found(BOOK_NOT_FOUND_MSG));
        }
        self.save(&remaining).await?;
        Ok(before - remaining.len())
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let _guard = self.store_lock.lock().await;
        self.load().await
    }
}
