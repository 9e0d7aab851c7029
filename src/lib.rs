//! Bookshelf – a small GraphQL endpoint over an immutable in-memory catalog.
//!
//! The service declares two entity types (Book, Author), seeds them with a
//! fixed dataset at process start, and answers four query shapes by linear
//! scan with manual relationship stitching:
//!
//! * `book(id: Int!)` – a single book, with its author resolved.
//! * `books` – every book in store order.
//! * `author(id: Int!)` – a single author, with their books attached.
//! * `authors` – every author in store order.
//!
//! Query parsing, validation and serialization are delegated to
//! `async-graphql`; HTTP serving to `axum`. The resolvers themselves are
//! stateless pure functions over the catalog, and "not found" is an ordinary
//! null result, never an error.
//!
//! ## Modules
//! * [`catalog`] – The record types and the immutable data store.
//! * [`schema`] – Entity views, the query root and schema construction.
//! * [`server`] – The axum router exposing `/graphql` (POST queries, GET GraphiQL).
//! * [`settings`] – Startup configuration (listen address and port).
//! * [`error`] – The crate error type and `Result` alias.
//!
//! ## Quick Start
//! ```
//! use std::sync::Arc;
//! use bookshelf::{catalog::Catalog, schema::build_schema};
//!
//! let schema = build_schema(Arc::new(Catalog::seeded()));
//! assert!(schema.sdl().contains("book(id: Int!): Book"));
//! ```

pub mod catalog;
pub mod error;
pub mod schema;
pub mod server;
pub mod settings;
