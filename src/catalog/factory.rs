use std::sync::Arc;
use tokio::sync::Mutex;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

pub(crate) async fn create_catalog_service(config: &Configuration, store_lock: Arc<Mutex<()>>) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(config, store_lock).await;
    Box::new(CatalogServiceImpl::new(config, book_repo))
}
