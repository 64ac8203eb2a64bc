use serde::{Deserialize, Serialize};
use serde_json::Value;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    // identifier exactly as it was stored, not coerced to a string
    fn id(&self) -> Option<&Value>;

    fn has_id(&self, id: &str) -> bool {
        matches!(self.id(), Some(Value::String(s)) if s == id)
    }

    fn same_id(&self, other: &dyn Identifiable) -> bool {
        ids_equal(self.id(), other.id())
    }
}

// strict identity of stored ids: numbers compare by value, arrays and objects never match
pub fn ids_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(Value::Null), Some(Value::Null)) => true,
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x == y,
        (Some(Value::String(x)), Some(Value::String(y))) => x == y,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x.as_f64() == y.as_f64(),
        _ => false,
    }
}

pub const DEFAULT_PORT: u16 = 4000;

// Configuration abstracts config options for the book registry
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub port: u16,
    pub data_file: String,
    pub static_dir: String,
    pub index_page: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            port: DEFAULT_PORT,
            data_file: "books.json".to_string(),
            static_dir: "static".to_string(),
            index_page: "pages/index.html".to_string(),
        }
    }

    pub fn with_data_file(mut self, data_file: &str) -> Self {
        self.data_file = data_file.to_string();
        self
    }
}
