use crate::app::render::OutputFormat;
use crate::config::ClientConfig;
use crate::utils::error::{CepError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔格式:
///
/// ```toml
/// [client]
/// base_url = "https://viacep.com.br"
/// connect_timeout_seconds = 5
/// timeout_seconds = 15
///
/// [output]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub client: Option<ClientSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    pub base_url: Option<String>,
    pub connect_timeout_seconds: Option<u64>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CepError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CepError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${VIACEP_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CepError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 以檔案中有設定的欄位覆蓋 `config`
    pub fn apply_to(&self, config: &mut ClientConfig) {
        let Some(client) = &self.client else {
            return;
        };

        if let Some(base_url) = &client.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(connect_timeout) = client.connect_timeout_seconds {
            config.connect_timeout_seconds = connect_timeout;
        }
        if let Some(timeout) = client.timeout_seconds {
            config.timeout_seconds = timeout;
        }
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}
