use std::sync::Arc;

use bookshelf::catalog::Catalog;
use bookshelf::schema::{BookshelfSchema, build_schema};
use serde_json::json;

fn setup() -> BookshelfSchema {
    build_schema(Arc::new(Catalog::seeded()))
}

#[tokio::test]
async fn books_listing_preserves_store_length_and_order() {
    let schema = setup();
    let response = schema.execute("{ books { id title authorId } }").await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "books": [
            { "id": 1, "title": "The Great Gatsby", "authorId": 1 },
            { "id": 2, "title": "To Kill a Mockingbird", "authorId": 2 },
            { "id": 2, "title": "Book by Fitzgerald", "authorId": 1 }
        ] })
    );
}

#[tokio::test]
async fn authors_listing_is_exactly_the_seeded_records() {
    let schema = setup();
    let response = schema.execute("{ authors { id name } }").await;
    assert!(response.errors.is_empty());
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "authors": [
            { "id": 1, "name": "F. Scott Fitzgerald" },
            { "id": 2, "name": "Harper Lee" }
        ] })
    );
}

#[tokio::test]
async fn listings_attach_no_relationships() {
    // Only the single-record lookups stitch related entities; in list
    // position the related fields stay null.
    let schema = setup();
    let response = schema
        .execute("{ books { id author { id } } authors { id books { id } } }")
        .await;
    assert!(response.errors.is_empty());
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "books": [
                { "id": 1, "author": null },
                { "id": 2, "author": null },
                { "id": 2, "author": null }
            ],
            "authors": [
                { "id": 1, "books": null },
                { "id": 2, "books": null }
            ]
        })
    );
}
