use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::books::domain::{is_truthy, Book};
use crate::core::domain::Identifiable;

// BookDto is the payload accepted by the Catalog service when adding a book. Values stay
// opaque json so that presence checks see exactly what the caller sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    #[serde(default)]
    pub book_id: Value,
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub author: Value,
    #[serde(default)]
    pub genre: Value,
    #[serde(default)]
    pub year: Value,
    #[serde(default)]
    pub copies: Value,
}

impl BookDto {
    pub fn new(book_id: &str, title: &str, author: &str, genre: &str, year: Value, copies: Value) -> BookDto {
        BookDto {
            book_id: Value::from(book_id),
            title: Value::from(title),
            author: Value::from(author),
            genre: Value::from(genre),
            year,
            copies,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> Option<&Value> {
        Some(&self.book_id)
    }
}

impl Book for BookDto {
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("book_id", &self.book_id),
            ("title", &self.title),
            ("author", &self.author),
            ("genre", &self.genre),
            ("year", &self.year),
            ("copies", &self.copies),
        ].into_iter()
            .filter(|(_, v)| !is_truthy(v))
            .map(|(k, _)| k)
            .collect()
    }
}
