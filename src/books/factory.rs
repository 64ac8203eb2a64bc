use std::sync::Arc;
use tokio::sync::Mutex;
use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::core::domain::Configuration;

pub(crate) async fn create_book_repository(config: &Configuration, store_lock: Arc<Mutex<()>>) -> Box<dyn BookRepository> {
    Box::new(JsonBookRepository::new(config.data_file.as_str(), store_lock))
}
