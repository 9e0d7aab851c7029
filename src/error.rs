
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, BookshelfError>;

// Helper conversions
impl From<config::ConfigError> for BookshelfError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<std::io::Error> for BookshelfError {
    fn from(e: std::io::Error) -> Self { Self::Server(e.to_string()) }
}
