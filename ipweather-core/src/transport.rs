use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt::Debug;

use crate::error::StageError;

/// Issues a single GET and yields the body of a successful response.
///
/// There is no timeout and no retry: a request that never completes yields a
/// future that never resolves.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(&self, url: &str) -> Result<String, StageError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        // reqwest applies no request timeout unless one is configured.
        Self {
            http: Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, StageError> {
        tracing::debug!(%url, "opening connection");

        let transport_err = |source| StageError::Transport {
            url: url.to_string(),
            source,
        };

        let res = self.http.get(url).send().await.map_err(transport_err)?;

        // Only 200 counts as complete and successful.
        let status = res.status();
        if status != StatusCode::OK {
            return Err(StageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        res.text().await.map_err(transport_err)
    }
}
