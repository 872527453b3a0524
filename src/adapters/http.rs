use crate::config::ClientConfig;
use crate::domain::ports::{Connection, Transport, TransportError};
use reqwest::blocking::Client;
use std::time::Duration;

/// Reaches the ViaCEP host through a blocking reqwest client.
///
/// Every `connect` builds a brand-new client with idle pooling disabled,
/// so a connection never outlives the lookup that opened it.
#[derive(Debug, Clone)]
pub struct HttpsTransport {
    base_url: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpsTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            connect_timeout: Duration::from_secs(config.connect_timeout_seconds),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpsTransport {
    type Connection = HttpsConnection;

    fn connect(&self) -> Result<HttpsConnection, TransportError> {
        let client = Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(HttpsConnection {
            base_url: self.base_url.clone(),
            client: Some(client),
        })
    }
}

pub struct HttpsConnection {
    base_url: String,
    client: Option<Client>,
}

impl Connection for HttpsConnection {
    fn get(&mut self, path: &str) -> Result<Vec<u8>, TransportError> {
        let client = self.client.as_ref().ok_or_else(|| {
            TransportError::Io(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "connection already closed",
            ))
        })?;

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = client.get(&url).send()?;
        // ViaCEP 對格式錯誤的 CEP 回 400，內容交由呼叫端解析
        tracing::debug!("API response status: {}", response.status());

        let body = response.bytes()?;
        Ok(body.to_vec())
    }

    fn close(&mut self) {
        if self.client.take().is_some() {
            tracing::debug!("Closed connection to {}", self.base_url);
        }
    }
}
