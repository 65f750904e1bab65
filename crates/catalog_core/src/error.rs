use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogApiError {
    #[error("invalid endpoint '{path}' for base url {base}: {source}")]
    InvalidEndpoint {
        base: String,
        path: String,
        source: url::ParseError,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected request to {url} with status {status}")]
    Status { status: u16, url: String },
    #[error("failed to encode request body: {0}")]
    Encode(serde_json::Error),
    #[error("malformed response body from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}
