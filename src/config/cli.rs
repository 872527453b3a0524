use crate::app::render::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::ClientConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "cep-lookup")]
#[command(about = "Look up a Brazilian postal code (CEP) on ViaCEP")]
pub struct CliConfig {
    #[arg(default_value = "02411050", help = "CEP to look up, e.g. 01001000")]
    pub postal_code: String,

    #[arg(long, help = "TOML file with [client] and [output] sections")]
    pub config: Option<String>,

    #[arg(long, help = "Override the service base URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "Connect timeout in seconds")]
    pub connect_timeout: Option<u64>,

    #[arg(long, help = "Total request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, value_enum, help = "Output format [default: text]")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Forward the CEP without checking its format")]
    pub no_validate: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併設定: 預設值 < TOML 檔 < 命令列參數
    pub fn resolve(&self) -> Result<(ClientConfig, OutputFormat)> {
        let mut client = ClientConfig::default();
        let mut format = OutputFormat::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading config file {}", path);
            let toml_config = TomlConfig::from_file(path)?;
            toml_config.apply_to(&mut client);
            if let Some(file_format) = toml_config.output_format() {
                format = file_format;
            }
        }

        if let Some(base_url) = &self.base_url {
            client.base_url = base_url.clone();
        }
        if let Some(connect_timeout) = self.connect_timeout {
            client.connect_timeout_seconds = connect_timeout;
        }
        if let Some(timeout) = self.timeout {
            client.timeout_seconds = timeout;
        }
        if let Some(cli_format) = self.format {
            format = cli_format;
        }

        client.validate()?;
        Ok((client, format))
    }
}
