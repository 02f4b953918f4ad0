use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrolledError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Input is not valid UTF-8 text")]
    InvalidUtf8,

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}

impl From<std::io::Error> for ScrolledError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::InvalidData {
            ScrolledError::InvalidUtf8
        } else {
            ScrolledError::Io(err.to_string())
        }
    }
}
