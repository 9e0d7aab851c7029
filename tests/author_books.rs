use std::sync::Arc;

use bookshelf::catalog::Catalog;
use bookshelf::schema::{BookshelfSchema, build_schema};
use serde_json::json;

fn setup() -> BookshelfSchema {
    build_schema(Arc::new(Catalog::seeded()))
}

#[tokio::test]
async fn author_carries_their_books_in_store_order() {
    let schema = setup();
    let response = schema
        .execute("{ author(id: 1) { id name books { id title authorId } } }")
        .await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "author": {
            "id": 1,
            "name": "F. Scott Fitzgerald",
            "books": [
                { "id": 1, "title": "The Great Gatsby", "authorId": 1 },
                { "id": 2, "title": "Book by Fitzgerald", "authorId": 1 }
            ]
        } })
    );
}

#[test]
fn books_are_the_ordered_subsequence_for_every_seeded_author() {
    let catalog = Catalog::seeded();
    for author in catalog.authors() {
        let expected: Vec<_> = catalog
            .books()
            .iter()
            .filter(|book| book.author_id() == author.id())
            .collect();
        assert_eq!(
            catalog.books_by_author(author.id()),
            expected,
            "author {} should get exactly the books referencing them, in store order",
            author.id()
        );
    }
}

#[tokio::test]
async fn unknown_author_yields_null_without_error() {
    let schema = setup();
    let response = schema.execute("{ author(id: 42) { name } }").await;
    assert!(response.errors.is_empty());
    assert_eq!(response.data.into_json().unwrap(), json!({ "author": null }));
}
