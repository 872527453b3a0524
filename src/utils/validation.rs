use crate::utils::error::{CepError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CepError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Checks the CEP shape: `NNNNNNNN` or `NNNNN-NNN`.
///
/// `AddressLookupClient::lookup` never calls this; callers that want
/// local rejection opt in.
pub fn validate_postal_code(value: &str) -> Result<()> {
    let invalid = |reason: &str| CepError::InvalidPostalCode {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    if value.trim().is_empty() {
        return Err(invalid("CEP cannot be empty"));
    }

    let digits: String = match value.split_once('-') {
        Some((head, tail)) if head.len() == 5 && tail.len() == 3 => format!("{}{}", head, tail),
        Some(_) => return Err(invalid("hyphenated CEP must look like 12345-678")),
        None => value.to_string(),
    };

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("CEP must contain only digits"));
    }

    if digits.len() != 8 {
        return Err(invalid("CEP must have exactly 8 digits"));
    }

    Ok(())
}
