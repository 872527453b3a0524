use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout(#[source] Option<reqwest::Error>),

    #[error("HTTP transport failure: {0}")]
    Http(reqwest::Error),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(Some(e))
        } else {
            TransportError::Http(e)
        }
    }
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout(_))
    }
}

/// Opens one connection per lookup. Connections are never pooled or reused.
pub trait Transport {
    type Connection: Connection;

    fn connect(&self) -> std::result::Result<Self::Connection, TransportError>;
}

pub trait Connection {
    /// Sends a bodiless GET for `path` and blocks until the whole body is read.
    fn get(&mut self, path: &str) -> std::result::Result<Vec<u8>, TransportError>;

    fn close(&mut self);
}
