use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream provider rejected the request (non-2xx status or an
    /// error envelope under a 200). The message is the user-visible
    /// string that ends up in slice state.
    #[error("{0}")]
    Provider(String),

    #[error("Unexpected response shape: {0}")]
    Decode(String),
}
