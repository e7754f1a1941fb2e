use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::datamodel::{self, Author, Book};
use crate::error::{LibraryError, Result};

#[derive(Debug, Default)]
struct Collections {
    authors: Vec<Author>,
    books: Vec<Book>,
}

/// Shared handle to the in-memory author and book collections.
///
/// Both collections are append-only and kept in insertion order. Cloning the
/// handle shares the same underlying storage.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Collections>>,
}

impl Store {
    /// A store holding the fixed startup records.
    pub fn seeded() -> Self {
        let collections = Collections {
            authors: datamodel::seed_authors(),
            books: datamodel::seed_books(),
        };
        Self {
            inner: Arc::new(RwLock::new(collections)),
        }
    }

    // Records are only ever appended whole, so a writer that panicked cannot
    // leave the collections in a torn state.
    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn authors(&self) -> Vec<Author> {
        self.read().authors.clone()
    }

    pub fn books(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    /// Returns the first book matching `id` or, independently, `name`.
    ///
    /// An omitted argument never matches, so calling this with neither
    /// yields `None`.
    pub fn find_book(&self, id: Option<i32>, name: Option<&str>) -> Option<Book> {
        self.read()
            .books
            .iter()
            .find(|book| {
                id.is_some_and(|id| book.id == id)
                    || name.is_some_and(|name| book.name.as_deref() == Some(name))
            })
            .cloned()
    }

    pub fn find_author(&self, id: i32) -> Option<Author> {
        self.read()
            .authors
            .iter()
            .find(|author| author.id == id)
            .cloned()
    }

    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.read()
            .books
            .iter()
            .filter(|book| book.author_id == Some(author_id))
            .cloned()
            .collect()
    }

    /// Appends a book with the next id. The new record has no `date`.
    pub fn add_book(&self, author_id: Option<i32>, name: Option<String>) -> Result<Book> {
        let mut collections = self.write();
        let id = next_id(collections.books.len(), "books")?;
        let book = Book {
            id,
            name,
            date: None,
            author_id,
        };
        collections.books.push(book.clone());
        Ok(book)
    }

    /// Appends an author with the next id.
    pub fn add_author(&self, name: Option<String>) -> Result<Author> {
        let mut collections = self.write();
        let id = next_id(collections.authors.len(), "authors")?;
        let author = Author { id, name };
        collections.authors.push(author.clone());
        Ok(author)
    }
}

fn next_id(len: usize, collection: &'static str) -> Result<i32> {
    len.checked_add(1)
        .and_then(|id| i32::try_from(id).ok())
        .ok_or(LibraryError::IdSpaceExhausted { collection })
}
