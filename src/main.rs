use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bookshelf::catalog::Catalog;
use bookshelf::error::Result;
use bookshelf::schema::build_schema;
use bookshelf::server;
use bookshelf::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    let catalog = Arc::new(Catalog::seeded());
    let schema = build_schema(catalog);
    let app = server::router(schema);

    let address = settings.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("GraphQL server running at http://{address}/graphql");
    axum::serve(listener, app).await?;
    Ok(())
}
