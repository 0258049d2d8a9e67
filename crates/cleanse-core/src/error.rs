use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid pattern for '{category}': {message}")]
    InvalidPattern { category: String, message: String },

    #[error("Placeholder {placeholder:?} is matched by the '{category}' detector")]
    PlaceholderConflict {
        placeholder: String,
        category: String,
    },

    #[error("Scan request failed: {0}")]
    Scan(String),
}

pub type Result<T> = std::result::Result<T, Error>;
