use async_graphql::{Context, Object, Result};

use crate::datamodel::{Author, Book};
use crate::error::non_null;

use super::loaders::Loaders;

/// GraphQL `[T]`: a nullable list of nullable items, so a failing item
/// nulls out on its own instead of taking the whole list with it.
type NullableList<T> = Option<Vec<Option<T>>>;

fn nullable_list<T>(items: Vec<T>) -> NullableList<T> {
    Some(items.into_iter().map(Some).collect())
}

/// Show Book
#[Object]
impl Book {
    async fn id(&self) -> i32 {
        self.id
    }

    async fn name(&self) -> Result<&str> {
        Ok(non_null(self.name.as_deref(), "Book", "name")?)
    }

    async fn date(&self) -> Result<&str> {
        Ok(non_null(self.date.as_deref(), "Book", "date")?)
    }

    #[graphql(name = "author_id")]
    async fn author_id(&self) -> Result<i32> {
        Ok(non_null(self.author_id, "Book", "author_id")?)
    }

    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        self.author_id.and_then(|id| ctx.load_author(id))
    }
}

/// Name of the author
#[Object]
impl Author {
    async fn id(&self) -> i32 {
        self.id
    }

    async fn name(&self) -> Result<&str> {
        Ok(non_null(self.name.as_deref(), "Author", "name")?)
    }

    async fn books(&self, ctx: &Context<'_>) -> NullableList<Book> {
        nullable_list(ctx.load_books_by(self.id))
    }
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// Find a book
    async fn book(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
        name: Option<String>,
    ) -> Option<Book> {
        ctx.load_book(id, name.as_deref())
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> NullableList<Book> {
        nullable_list(ctx.store().books())
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> NullableList<Author> {
        nullable_list(ctx.store().authors())
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Adds a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "author_id")] author_id: Option<i32>,
        name: Option<String>,
    ) -> Result<Option<Book>> {
        let book = ctx.store().add_book(author_id, name)?;
        tracing::info!(
            id = book.id,
            name = ?book.name,
            author_id = ?book.author_id,
            "added book"
        );
        Ok(Some(book))
    }

    /// Adds a Author
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
    ) -> Result<Option<Author>> {
        let author = ctx.store().add_author(name)?;
        tracing::info!(id = author.id, name = ?author.name, "added author");
        Ok(Some(author))
    }
}
