use async_graphql::Context;

use crate::datamodel::{Author, Book};
use crate::store::Store;

/// Store access for resolvers.
///
/// The `Store` handle is registered as schema data in [`super::build_schema`],
/// so every resolver reaches the collections through its `Context` rather than
/// through captured state.
pub trait Loaders {
    fn store(&self) -> &Store;

    fn load_book(&self, id: Option<i32>, name: Option<&str>) -> Option<Book> {
        let book = self.store().find_book(id, name);
        tracing::debug!(?id, ?name, found = book.is_some(), "looked up book");
        book
    }

    fn load_author(&self, id: i32) -> Option<Author> {
        self.store().find_author(id)
    }

    fn load_books_by(&self, author_id: i32) -> Vec<Book> {
        self.store().books_by_author(author_id)
    }
}

impl Loaders for Context<'_> {
    fn store(&self) -> &Store {
        self.data_unchecked::<Store>()
    }
}
