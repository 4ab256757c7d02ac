use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Details of a non-2xx response, shared by every status error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseError {
    pub status: u16,
    pub reason: String,
    pub uri: String,
    pub message: Option<String>,
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Server responded with code {} ({})", self.status, self.reason)?;

        if let Some(message) = &self.message {
            write!(f, ", message: {message}")?;
        }

        write!(f, ". Request URI: {}", self.uri)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    MissingCredentials(String),

    #[error("{0}")]
    MissingAttributes(String),

    /// Strict wrapper was asked for a key it does not hold.
    #[error("no attribute '{0}'")]
    NoAttribute(String),

    #[error("invalid arguments: {0}")]
    Arguments(String),

    #[error("connection error: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("{0}")]
    BadRequest(ResponseError),

    #[error("{0}")]
    Unauthorized(ResponseError),

    #[error("{0}")]
    Forbidden(ResponseError),

    #[error("{0}")]
    NotFound(ResponseError),

    #[error("{0}")]
    MethodNotAllowed(ResponseError),

    #[error("{0}")]
    Conflict(ResponseError),

    #[error("{0}")]
    Unprocessable(ResponseError),

    #[error("{0}")]
    InternalServerError(ResponseError),

    #[error("{0}")]
    BadGateway(ResponseError),

    #[error("{0}")]
    ServiceUnavailable(ResponseError),

    #[error("{0}")]
    UnexpectedStatus(ResponseError),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("http client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    /// Maps a non-2xx status to its error kind. 2xx codes are not expected here
    /// and fall through to `UnexpectedStatus`.
    pub fn from_status(response: ResponseError) -> Self {
        match response.status {
            400 => Error::BadRequest(response),
            401 => Error::Unauthorized(response),
            403 => Error::Forbidden(response),
            404 => Error::NotFound(response),
            405 => Error::MethodNotAllowed(response),
            409 => Error::Conflict(response),
            422 => Error::Unprocessable(response),
            500 => Error::InternalServerError(response),
            502 => Error::BadGateway(response),
            503 => Error::ServiceUnavailable(response),
            _ => Error::UnexpectedStatus(response),
        }
    }

    pub fn response(&self) -> Option<&ResponseError> {
        match self {
            Error::BadRequest(r)
            | Error::Unauthorized(r)
            | Error::Forbidden(r)
            | Error::NotFound(r)
            | Error::MethodNotAllowed(r)
            | Error::Conflict(r)
            | Error::Unprocessable(r)
            | Error::InternalServerError(r)
            | Error::BadGateway(r)
            | Error::ServiceUnavailable(r)
            | Error::UnexpectedStatus(r) => Some(r),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }
}
