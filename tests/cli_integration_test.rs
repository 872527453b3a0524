use anyhow::Result;
use httpmock::prelude::*;
use std::process::Command;

fn cep_lookup() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_cep-lookup"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn test_cli_prints_found_address() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/ws/02411050/json/");
        then.status(200).json_body(serde_json::json!({
            "cep": "02411-050",
            "logradouro": "Rua Exemplo",
            "bairro": "Centro",
            "localidade": "São Paulo",
            "uf": "SP"
        }));
    });

    let output = cep_lookup()
        .args(["02411050", "--base-url", server.base_url().as_str()])
        .output()?;

    api_mock.assert();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("logradouro: Rua Exemplo"));
    assert!(stdout.contains("localidade: São Paulo"));
    Ok(())
}

#[test]
fn test_cli_not_found_exits_with_one() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ws/00000000/json/");
        then.status(200).json_body(serde_json::json!({ "erro": true }));
    });

    let output = cep_lookup()
        .args(["00000000", "--base-url", server.base_url().as_str(), "--format", "json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stdout)?, "CEP 00000000 not found\n");
    Ok(())
}

#[test]
fn test_cli_rejects_malformed_cep_without_request() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({ "erro": true }));
    });

    let output = cep_lookup()
        .args(["12ab", "--base-url", server.base_url().as_str()])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(api_mock.hits(), 0);
    Ok(())
}

#[test]
fn test_cli_no_validate_forwards_malformed_cep() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/ws/12ab/json/");
        then.status(400).body("<h2>Http 400</h2>");
    });

    let output = cep_lookup()
        .args(["12ab", "--no-validate", "--base-url", server.base_url().as_str()])
        .output()?;

    api_mock.assert();
    assert_eq!(output.status.code(), Some(4));
    Ok(())
}

#[test]
fn test_cli_no_validate_still_refuses_codes_that_change_the_path() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({ "uf": "SP" }));
    });

    let output = cep_lookup()
        .args(["0100#1000", "--no-validate", "--base-url", server.base_url().as_str()])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(api_mock.hits(), 0);
    assert!(output.stdout.is_empty());
    Ok(())
}
