use crate::core::{AddressRecord, Connection, LookupResult, Transport};
use crate::domain::ports::TransportError;
use crate::utils::error::{CepError, Result};

/// Key ViaCEP sets when it has no address for the requested CEP.
pub const NOT_FOUND_KEY: &str = "erro";

/// 將 CEP 原樣嵌入 ViaCEP 的 JSON 路徑，不做任何編碼
///
/// Codes the URL parser would rewrite before they reach the service are
/// rejected instead: `#` and `?` start a fragment or query, `/` and `\`
/// split the segment, `%` turns into an escape, control characters are
/// stripped, and `.` / `..` are resolved away as dot segments.
pub fn request_path(postal_code: &str) -> Result<String> {
    let rejected = |reason: &str| CepError::InvalidPostalCode {
        value: postal_code.to_string(),
        reason: reason.to_string(),
    };

    if let Some(c) = postal_code
        .chars()
        .find(|&c| matches!(c, '#' | '?' | '/' | '\\' | '%') || c.is_control())
    {
        return Err(rejected(&format!(
            "character {:?} cannot be sent unchanged in the request path",
            c
        )));
    }

    if postal_code == "." || postal_code == ".." {
        return Err(rejected("dot segments cannot be sent unchanged in the request path"));
    }

    Ok(format!("/ws/{}/json/", postal_code))
}

/// Holds a connection for the duration of one lookup and closes it on drop,
/// whichever way the lookup exits.
struct ScopedConnection<C: Connection> {
    inner: C,
}

impl<C: Connection> Drop for ScopedConnection<C> {
    fn drop(&mut self) {
        self.inner.close();
    }
}

pub struct AddressLookupClient<T: Transport> {
    transport: T,
}

impl<T: Transport> AddressLookupClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Looks up one CEP with a single GET on a fresh connection.
    ///
    /// The code is forwarded verbatim; malformed input is left for the
    /// service to reject, and its answer is trusted. The only local check is
    /// that the code survives URL parsing unchanged (see [`request_path`]);
    /// a code that would address a different resource fails with
    /// `InvalidPostalCode` before any connection is opened. `NotFound` is a
    /// normal result, while transport, decoding and parsing failures are
    /// errors tagged with the CEP that caused them.
    pub fn lookup(&self, postal_code: &str) -> Result<LookupResult> {
        let path = request_path(postal_code)?;
        tracing::debug!("Requesting {}", path);

        let mut connection = ScopedConnection {
            inner: self
                .transport
                .connect()
                .map_err(|e| transport_error(postal_code, e))?,
        };

        let body = connection
            .inner
            .get(&path)
            .map_err(|e| transport_error(postal_code, e))?;
        tracing::debug!("Received {} bytes for CEP {}", body.len(), postal_code);

        let result = classify(postal_code, body)?;
        match &result {
            LookupResult::Found(record) => tracing::info!(
                "CEP {} found: {}",
                postal_code,
                record.city.as_deref().unwrap_or("-")
            ),
            LookupResult::NotFound => tracing::info!("CEP {} not found", postal_code),
        }

        Ok(result)
    }
}

fn transport_error(postal_code: &str, source: TransportError) -> CepError {
    let postal_code = postal_code.to_string();
    if source.is_timeout() {
        CepError::Timeout {
            postal_code,
            source,
        }
    } else {
        CepError::Connection {
            postal_code,
            source,
        }
    }
}

/// 將回應位元組解碼、解析並分類為 Found / NotFound
pub fn classify(postal_code: &str, body: Vec<u8>) -> Result<LookupResult> {
    let text = String::from_utf8(body).map_err(|source| CepError::Decode {
        postal_code: postal_code.to_string(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| CepError::Parse {
            postal_code: postal_code.to_string(),
            source,
        })?;

    let object = match value {
        serde_json::Value::Object(object) => object,
        other => {
            return Err(CepError::NotAnObject {
                postal_code: postal_code.to_string(),
                found: json_kind(&other),
            })
        }
    };

    if object.contains_key(NOT_FOUND_KEY) {
        return Ok(LookupResult::NotFound);
    }

    let record: AddressRecord = serde_json::from_value(serde_json::Value::Object(object))
        .map_err(|source| CepError::Parse {
            postal_code: postal_code.to_string(),
            source,
        })?;

    Ok(LookupResult::Found(record))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
