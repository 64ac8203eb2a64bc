pub mod json_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {}

impl<T: Repository<BookEntity>> BookRepository for T {}
