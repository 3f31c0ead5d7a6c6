//! Ways a single pipeline stage can end early.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StageError {
    #[error("request to {url} did not complete: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("response body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} response is missing required fields")]
    Invalid(&'static str),
}

impl StageError {
    /// Transport and status failures never reach the page; the cycle just stops.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Status { .. })
    }
}
