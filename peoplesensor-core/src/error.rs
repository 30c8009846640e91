//! Error types shared by the module, client and demo binaries

use crate::resource::ResourceName;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Dependency not found: {0}")]
    DependencyNotFound(ResourceName),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Resource already exists: {0}")]
    ResourceExists(String),

    #[error("Resource is closed: {0}")]
    ResourceClosed(String),

    #[error("No registration for model {model} of api {api}")]
    ModelNotRegistered { api: String, model: String },

    #[error("Model {model} of api {api} is already registered")]
    DuplicateRegistration { api: String, model: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid resource name: {0}")]
    InvalidName(String),

    #[error("Unimplemented: {0}")]
    Unimplemented(String),

    #[error("Module not ready: {0}")]
    NotReady(String),

    #[error("Remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status this error is reported with by servers speaking the host protocol.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidConfig(_)
            | Error::InvalidRequest(_)
            | Error::InvalidName(_)
            | Error::Serialization(_) => 400,
            Error::DependencyNotFound(_)
            | Error::ResourceNotFound(_)
            | Error::ModelNotRegistered { .. } => 404,
            Error::ResourceExists(_) | Error::ResourceClosed(_) | Error::DuplicateRegistration { .. } => 409,
            Error::Unimplemented(_) => 501,
            Error::NotReady(_) => 503,
            Error::Remote { status, .. } => *status,
            Error::Transport(_) => 502,
            Error::Io(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
