//! The GraphQL schema: entity views and the four root-field resolvers.
//!
//! Clients ask for exactly the shape they need:
//!
//! ```graphql
//! query GetBook($id: Int!) {
//!   book(id: $id) { title }
//! }
//!
//! query GetBookAndAuthor($id: Int!) {
//!   book(id: $id) { id title author { name } }
//! }
//!
//! query GetAllBooksOfAuthor($id: Int!) {
//!   author(id: $id) { name books { title } }
//! }
//! ```
//!
//! Every resolver is a pure function of the catalog and its arguments; the
//! executor owns parsing, validation and required-argument enforcement, so a
//! resolver never sees partially-formed input. Related entities are stitched
//! eagerly and only for single-record lookups: a book looked up by id carries
//! its author, an author looked up by id carries its books, and the list
//! resolvers return the records as-is with no relationships attached.

use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema, SimpleObject};

use crate::catalog::{Author, AuthorId, Book, BookId, Catalog};

/// The executable schema, with the catalog injected into the query root.
pub type BookshelfSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

// ------------- Views -------------
// Explicit per-entity result structs, constructed by value. The catalog
// records never leak into the wire format; the optional related-entity
// fields are populated only where the operation stitches them.

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Book")]
pub struct BookView {
    id: BookId,
    title: String,
    author_id: AuthorId,
    author: Option<AuthorView>,
}

impl BookView {
    fn bare(book: &Book) -> Self {
        Self {
            id: book.id(),
            title: book.title().to_owned(),
            author_id: book.author_id(),
            author: None,
        }
    }
    fn with_author(book: &Book, author: Option<&Author>) -> Self {
        Self {
            author: author.map(AuthorView::bare),
            ..Self::bare(book)
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Author")]
pub struct AuthorView {
    id: AuthorId,
    name: String,
    books: Option<Vec<BookView>>,
}

impl AuthorView {
    fn bare(author: &Author) -> Self {
        Self {
            id: author.id(),
            name: author.name().to_owned(),
            books: None,
        }
    }
    fn with_books(author: &Author, books: Vec<&Book>) -> Self {
        Self {
            books: Some(books.into_iter().map(BookView::bare).collect()),
            ..Self::bare(author)
        }
    }
}

// ------------- Query root -------------

pub struct QueryRoot {
    catalog: Arc<Catalog>,
}

#[Object]
impl QueryRoot {
    /// Look up a single book by identifier, with its author resolved. An
    /// unknown identifier yields null rather than an error, and a dangling
    /// author reference yields the book with a null author.
    async fn book(&self, id: BookId) -> Option<BookView> {
        let book = self.catalog.book_by_id(id)?;
        let author = self.catalog.author_by_id(book.author_id());
        Some(BookView::with_author(book, author))
    }

    /// All books in store order, no authors attached.
    async fn books(&self) -> Vec<BookView> {
        self.catalog.books().iter().map(BookView::bare).collect()
    }

    /// Look up a single author by identifier, with the ordered sequence of
    /// their books attached. An unknown identifier yields null.
    async fn author(&self, id: AuthorId) -> Option<AuthorView> {
        let author = self.catalog.author_by_id(id)?;
        let books = self.catalog.books_by_author(author.id());
        Some(AuthorView::with_books(author, books))
    }

    /// All authors in store order, no books attached.
    async fn authors(&self) -> Vec<AuthorView> {
        self.catalog.authors().iter().map(AuthorView::bare).collect()
    }
}

/// Build the executable schema around a shared catalog. The field-to-resolver
/// pairing is checked at compile time by the derive layer, so a schema that
/// builds cannot disagree with its resolvers.
pub fn build_schema(catalog: Arc<Catalog>) -> BookshelfSchema {
    Schema::build(QueryRoot { catalog }, EmptyMutation, EmptySubscription).finish()
}
