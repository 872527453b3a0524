pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::HttpsTransport;
pub use app::render::OutputFormat;
pub use config::ClientConfig;
pub use core::client::AddressLookupClient;
pub use domain::model::{AddressRecord, LookupResult};
pub use utils::error::{CepError, Result};
