#[derive(Debug, thiserror::Error)]
#[allow(dead_code)]
pub enum SiteCheckError {
    #[error("WebDriver session could not be established: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("WebDriver command failed: {0}")]
    Driver(#[from] fantoccini::error::CmdError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base URL is empty; tenant was not recognized")]
    EmptyBaseUrl,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SiteCheckError>;
