use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Terminal error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Invalid alias name: name may not be empty")]
    EmptyName,

    #[error("Invalid alias name `{}`: only letters, numbers, dots, underscores, colons and hyphens are allowed", .0)]
    InvalidName(String),

    #[error("No aliases were selected for removal")]
    EmptySelection,

    #[error("Operation cancelled by user")]
    Cancelled,
}

impl Error {
    pub fn io_error(file_description: &str, path: &str, original: std::io::Error) -> Self {
        Self::Io {
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }
}
