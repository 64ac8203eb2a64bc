use async_trait::async_trait;
use serde_json::{Map, Value};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, rejecting a duplicate identifier
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // overlays the given fields on an entity and returns the merged entity
    async fn update(&self, id: &str, fields: &Map<String, Value>) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities in stored order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}
