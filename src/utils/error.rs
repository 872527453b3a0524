use crate::domain::ports::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CepError {
    #[error("Connection failed for CEP {postal_code}: {source}")]
    Connection {
        postal_code: String,
        #[source]
        source: TransportError,
    },

    #[error("Request for CEP {postal_code} timed out")]
    Timeout {
        postal_code: String,
        #[source]
        source: TransportError,
    },

    #[error("Response for CEP {postal_code} is not valid UTF-8: {source}")]
    Decode {
        postal_code: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Response for CEP {postal_code} is not a valid address document: {source}")]
    Parse {
        postal_code: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response for CEP {postal_code} is JSON {found}, expected an object")]
    NotAnObject {
        postal_code: String,
        found: &'static str,
    },

    #[error("Invalid CEP '{value}': {reason}")]
    InvalidPostalCode { value: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Response,
    Local,
}

impl CepError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CepError::Connection { .. } | CepError::Timeout { .. } => ErrorCategory::Network,
            CepError::Decode { .. } | CepError::Parse { .. } | CepError::NotAnObject { .. } => {
                ErrorCategory::Response
            }
            CepError::InvalidPostalCode { .. }
            | CepError::ConfigError { .. }
            | CepError::InvalidConfigValueError { .. } => ErrorCategory::Input,
            CepError::IoError(_) | CepError::SerializationError(_) | CepError::CsvError(_) => {
                ErrorCategory::Local
            }
        }
    }

    /// 對應 CLI 的退出碼 (1 保留給 "查無此 CEP")
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 2,
            ErrorCategory::Network => 3,
            ErrorCategory::Response => 4,
            ErrorCategory::Local => 5,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CepError::Connection { postal_code, .. } => {
                format!("Could not reach the postal code service while looking up {}", postal_code)
            }
            CepError::Timeout { postal_code, .. } => {
                format!("The postal code service did not answer in time for {}", postal_code)
            }
            CepError::Decode { postal_code, .. }
            | CepError::Parse { postal_code, .. }
            | CepError::NotAnObject { postal_code, .. } => {
                format!("The service returned an unreadable answer for {}", postal_code)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the CEP (8 digits, e.g. 01001000) and the configuration values",
            ErrorCategory::Network => "Check your network connection or raise --timeout",
            ErrorCategory::Response => "The service may be degraded; try again later or check --base-url",
            ErrorCategory::Local => "Check that stdout is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        let timeout = CepError::Timeout {
            postal_code: "01001000".to_string(),
            source: TransportError::Timeout(None),
        };
        assert_eq!(timeout.category(), ErrorCategory::Network);
        assert_eq!(timeout.exit_code(), 3);

        let not_object = CepError::NotAnObject {
            postal_code: "01001000".to_string(),
            found: "array",
        };
        assert_eq!(not_object.exit_code(), 4);

        let invalid = CepError::InvalidPostalCode {
            value: "abc".to_string(),
            reason: "must contain only digits".to_string(),
        };
        assert_eq!(invalid.exit_code(), 2);
    }

    #[test]
    fn test_messages_carry_postal_code() {
        let err = CepError::Connection {
            postal_code: "02411050".to_string(),
            source: TransportError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "refused",
            )),
        };
        assert!(err.to_string().contains("02411050"));
        assert!(err.user_friendly_message().contains("02411050"));
    }
}
