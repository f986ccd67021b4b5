use hookgen_api::models::CollisionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookgenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid symbol model: {0}")]
    InvalidModel(String),
    #[error("Invalid type `{0}`")]
    InvalidType(String),
    #[error("Invalid reference `{0}`")]
    InvalidReference(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Reference `{reference}` matches {count} declarations; pick one by index")]
    Ambiguous { reference: String, count: usize },
    #[error("Collision set error: {0}")]
    Collision(#[from] CollisionError),
    #[error("Code generation is disabled by options")]
    Disabled,
}

pub type Result<T> = std::result::Result<T, HookgenError>;
