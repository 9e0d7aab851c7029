use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

/// Startup configuration: where the endpoint listens. Layered lookup in the
/// usual order — built-in defaults, then an optional `bookshelf` settings
/// file next to the binary, then `BOOKSHELF_*` environment overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub listen: String,
    pub port: u16,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .set_default("listen", "127.0.0.1")?
            .set_default("port", 4000)?
            .add_source(File::with_name("bookshelf").required(false))
            .add_source(Environment::with_prefix("BOOKSHELF"))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.listen, self.port)
    }
}
