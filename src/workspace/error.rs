use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("{url} responded with status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("failed to read response from {url}: {message}")]
    Body { url: String, message: String },
}

impl WorkspaceError {
    pub fn status(&self) -> Option<u16> {
        match self {
            WorkspaceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;
