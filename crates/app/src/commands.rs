//! Subcommand handlers

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use courier_application::ports::PassthroughDecryptor;
use courier_application::use_cases::MaterializeRequest;
use courier_domain::environment::{EnvironmentVariables, ScopeStore, SystemDefinition};
use courier_domain::request::RequestSpec;
use courier_domain::settings::ClientSettings;
use courier_domain::tls::RuntimeOptions;
use courier_infrastructure::{
    DecodeOptions, FileCertificateProvider, TlsAwareHttpClientFactory, UnsupportedPayloads,
    decode_curl, encode_curl,
};

use crate::cli::{CurlCommand, ResolveArgs, TlsArgs};

pub async fn curl(command: CurlCommand) -> Result<String> {
    match command {
        CurlCommand::Decode {
            input,
            reject_unsupported,
        } => {
            let text = read_input(input.as_deref()).await?;
            let options = DecodeOptions {
                unsupported_payloads: if reject_unsupported {
                    UnsupportedPayloads::Reject
                } else {
                    UnsupportedPayloads::Skip
                },
            };
            // Dropped payloads are already logged by the decoder.
            let import = decode_curl(&text, &options).context("failed to decode curl command")?;
            Ok(serde_json::to_string_pretty(&import.request)?)
        }
        CurlCommand::Encode { input } => {
            let request = load_request(input.as_deref()).await?;
            Ok(encode_curl(&request))
        }
    }
}

pub async fn resolve(args: ResolveArgs) -> Result<String> {
    let request = load_request(args.request.as_deref()).await?;

    let mut store = match &args.variables {
        Some(path) => parse_yaml::<ScopeStore>(path).await?,
        None => ScopeStore::new(),
    };
    if let Some(path) = &args.systems {
        let systems: Vec<SystemDefinition> = parse_yaml(path).await?;
        store = store.with_environment_variables(EnvironmentVariables::from_systems(&systems));
    }

    let resolved = MaterializeRequest::new(PassthroughDecryptor)
        .execute(&request, &store)
        .with_context(|| format!("failed to resolve request '{}'", request.name))?;
    Ok(serde_json::to_string_pretty(&resolved)?)
}

pub async fn tls(args: TlsArgs, settings: ClientSettings) -> Result<String> {
    let options = RuntimeOptions {
        disable_following_redirect: args.no_redirects,
        disable_ssl_certificate_verification: args.insecure,
        disable_ssl_client_certificate: args.no_client_certificate,
    };
    let factory = TlsAwareHttpClientFactory::new(
        FileCertificateProvider::new(args.certificates),
        PassthroughDecryptor,
        settings,
    );

    let client = factory
        .create(args.project, &options, args.url.as_deref(), None)
        .await
        .with_context(|| format!("failed to build client for project {}", args.project))?;

    let report = json!({
        "project": args.project,
        "url": args.url,
        "tls": client.tls(),
        "followRedirects": !options.disable_following_redirect,
        "defaultKeepAliveMs": settings.default_keep_alive_ms,
        "connectionLimit": client.available_connections(),
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

pub async fn load_settings(path: Option<&Path>) -> Result<ClientSettings> {
    match path {
        Some(path) => parse_yaml(path).await,
        None => Ok(ClientSettings::default()),
    }
}

async fn load_request(path: Option<&Path>) -> Result<RequestSpec> {
    let text = read_input(path).await?;
    serde_json::from_str(&text).context("invalid request document")
}

async fn parse_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        None => std::io::read_to_string(std::io::stdin()).context("failed to read stdin"),
    }
}
