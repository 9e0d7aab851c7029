use std::time::Instant;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    http::Method,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::schema::BookshelfSchema;

pub fn router(schema: BookshelfSchema) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);
    Router::new()
        .route("/graphql", get(graphiql).post(graphql))
        .layer(cors)
        .with_state(schema)
}

async fn graphql(State(schema): State<BookshelfSchema>, req: GraphQLRequest) -> GraphQLResponse {
    let started = Instant::now();
    let response = schema.execute(req.into_inner()).await;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    if response.is_ok() {
        info!(ms = elapsed_ms, "query complete");
    } else {
        let errors: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        warn!(ms = elapsed_ms, ?errors, "query failed");
    }
    response.into()
}

// The interactive in-browser IDE, served on GET from the same path.
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
