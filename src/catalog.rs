// ------------- Identifiers -------------
// Plain integers, matching the GraphQL Int the endpoint exposes. They are
// foreign keys by value, never live links between records.
pub type BookId = i32;
pub type AuthorId = i32;

// ------------- Book -------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author_id: AuthorId,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author_id: AuthorId) -> Self {
        Self {
            id,
            title: title.into(),
            author_id,
        }
    }
    // fields stay encapsulated behind getters; records cannot
    // change after creation
    pub fn id(&self) -> BookId {
        self.id
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }
}

// ------------- Author -------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    pub fn new(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
    pub fn id(&self) -> AuthorId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

// ------------- Catalog -------------
/// The data store: two fixed, ordered sequences of records, built once at
/// process start and read-only thereafter. No reload or update path exists,
/// so it can be shared freely between requests without locking.
///
/// Lookups are linear scans. The sequences are a handful of records and the
/// store never grows, which keeps every scan bounded and cheap.
#[derive(Debug)]
pub struct Catalog {
    books: Vec<Book>,
    authors: Vec<Author>,
}

impl Catalog {
    pub fn new(books: Vec<Book>, authors: Vec<Author>) -> Self {
        Self { books, authors }
    }

    /// The fixed sample dataset. Note that two books share id 2: identifiers
    /// are not checked for uniqueness, and the lookup policy below decides
    /// which record such a lookup yields.
    pub fn seeded() -> Self {
        Self::new(
            vec![
                Book::new(1, "The Great Gatsby", 1),
                Book::new(2, "To Kill a Mockingbird", 2),
                Book::new(2, "Book by Fitzgerald", 1),
            ],
            vec![
                Author::new(1, "F. Scott Fitzgerald"),
                Author::new(2, "Harper Lee"),
            ],
        )
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// First match in store order wins when identifiers collide.
    pub fn book_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn author_by_id(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|author| author.id == id)
    }

    /// All books whose author reference equals the given identifier, in
    /// store order. A full scan rather than an indexed join.
    pub fn books_by_author(&self, id: AuthorId) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.author_id == id)
            .collect()
    }
}
