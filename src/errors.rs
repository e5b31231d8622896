use astra::Response;
use thiserror::Error;

/// Errors raised while handling a single request.
/// None of them is fatal to the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

/// Errors that abort startup: reading the listings file or rendering the page.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed listings data: {0}")]
    Csv(#[from] csv::Error),
    #[error("cannot render dashboard: {0}")]
    Render(#[from] serde_json::Error),
}
