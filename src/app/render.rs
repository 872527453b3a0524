use crate::core::LookupResult;
use crate::utils::error::{CepError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn not_found_message(postal_code: &str) -> String {
    format!("CEP {} not found", postal_code)
}

/// 將查詢結果寫到 `out`；查無資料時所有格式都輸出同一行訊息
pub fn render<W: Write>(
    out: &mut W,
    postal_code: &str,
    result: &LookupResult,
    format: OutputFormat,
) -> Result<()> {
    let record = match result {
        LookupResult::Found(record) => record,
        LookupResult::NotFound => {
            writeln!(out, "{}", not_found_message(postal_code))?;
            return Ok(());
        }
    };

    match format {
        OutputFormat::Text => {
            for (key, value) in record.fields() {
                writeln!(out, "{}: {}", key, value)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(record)
                .map_err(|e| CepError::SerializationError(e.to_string()))?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Csv => {
            let fields = record.fields();
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(fields.iter().map(|(key, _)| key))?;
            writer.write_record(fields.iter().map(|(_, value)| value))?;
            writer.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AddressRecord;

    fn sample() -> LookupResult {
        LookupResult::Found(AddressRecord {
            postal_code: Some("02411-050".to_string()),
            street: Some("Rua Exemplo".to_string()),
            neighborhood: Some("Centro".to_string()),
            city: Some("São Paulo".to_string()),
            state: Some("SP".to_string()),
            ..AddressRecord::default()
        })
    }

    fn render_to_string(result: &LookupResult, format: OutputFormat) -> String {
        let mut out = Vec::new();
        render(&mut out, "02411050", result, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render_to_string(&sample(), OutputFormat::Text),
            "cep: 02411-050\nlogradouro: Rua Exemplo\nbairro: Centro\nlocalidade: São Paulo\nuf: SP\n"
        );
    }

    #[test]
    fn test_render_json_keeps_wire_keys() {
        let output = render_to_string(&sample(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "cep": "02411-050",
                "logradouro": "Rua Exemplo",
                "bairro": "Centro",
                "localidade": "São Paulo",
                "uf": "SP"
            })
        );
    }

    #[test]
    fn test_render_csv() {
        assert_eq!(
            render_to_string(&sample(), OutputFormat::Csv),
            "cep,logradouro,bairro,localidade,uf\n02411-050,Rua Exemplo,Centro,São Paulo,SP\n"
        );
    }

    #[test]
    fn test_render_not_found_is_the_same_in_every_format() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv] {
            assert_eq!(
                render_to_string(&LookupResult::NotFound, format),
                "CEP 02411050 not found\n"
            );
        }
    }
}
