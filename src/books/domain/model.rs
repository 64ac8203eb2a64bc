use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::books::dto::BookDto;
use crate::core::domain::Identifiable;

// BookEntity is a book record exactly as it is persisted in the store. Fields keep their
// insertion order and keys outside the six catalog fields survive untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookEntity {
    fields: Map<String, Value>,
}

impl BookEntity {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    // supplied values win, existing keys keep their position and new keys are appended
    pub fn merge(&mut self, other: &Map<String, Value>) {
        for (k, v) in other {
            self.fields.insert(k.to_string(), v.clone());
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> Option<&Value> {
        self.fields.get("book_id")
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        let mut fields = Map::new();
        fields.insert("book_id".to_string(), other.book_id.clone());
        fields.insert("title".to_string(), other.title.clone());
        fields.insert("author".to_string(), other.author.clone());
        fields.insert("genre".to_string(), other.genre.clone());
        fields.insert("year".to_string(), other.year.clone());
        fields.insert("copies".to_string(), other.copies.clone());
        Self { fields }
    }
}
