use hyper::StatusCode;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Plugin misconfiguration: {0}")]
    Configuration(String),

    #[error(transparent)]
    Settings(#[from] config::ConfigError),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Failed to send request: {0}")]
    Transport(#[from] hyper::Error),

    #[error("Failed to build request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("Invalid header value: {0}")]
    Header(#[from] hyper::header::InvalidHeaderValue),

    #[error("Request failed with status {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Unexpected response: {0}")]
    Response(String),

    #[error("Failed to authenticate: {0}")]
    Authentication(Box<Error>),

    #[error("Failed to upload test execution results: {0}")]
    Upload(Box<Error>),

    #[error("Failed to convert test results: {0}")]
    Conversion(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
