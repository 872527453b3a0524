use cep_lookup::app::render;
use cep_lookup::utils::{logger, validation};
use cep_lookup::{AddressLookupClient, CepError, CliConfig, HttpsTransport, LookupResult};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(LookupResult::Found(_)) => {}
        Ok(LookupResult::NotFound) => std::process::exit(1),
        Err(e) => {
            tracing::error!("❌ Lookup failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &CliConfig) -> Result<LookupResult, CepError> {
    let (client_config, format) = cli.resolve()?;

    if !cli.no_validate {
        validation::validate_postal_code(&cli.postal_code)?;
    }

    let client = AddressLookupClient::new(HttpsTransport::new(&client_config));
    let result = client.lookup(&cli.postal_code)?;

    let stdout = std::io::stdout();
    render::render(&mut stdout.lock(), &cli.postal_code, &result, format)?;

    Ok(result)
}
