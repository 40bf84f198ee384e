//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "courier",
    version,
    about = "Curl import/export, request materialization and TLS client inspection",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Client settings file (YAML)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert between curl command lines and request documents
    #[command(subcommand)]
    Curl(CurlCommand),

    /// Resolve placeholders in a request document
    Resolve(ResolveArgs),

    /// Build a project client and report its TLS behavior
    Tls(TlsArgs),
}

#[derive(Subcommand, Debug)]
pub enum CurlCommand {
    /// Read a curl command and print the request as JSON
    Decode {
        /// File with the curl command (defaults to stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Fail on file uploads and --data-binary instead of dropping them
        #[arg(long)]
        reject_unsupported: bool,
    },

    /// Read a request JSON document and print it as a curl command
    Encode {
        /// File with the request JSON (defaults to stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Request JSON document (defaults to stdin)
    #[arg(short, long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Variable scopes (YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    pub variables: Option<PathBuf>,

    /// Connected-system definitions of the selected environment (YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    pub systems: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TlsArgs {
    /// Project identifier
    #[arg(short, long)]
    pub project: Uuid,

    /// Directory holding one certificate directory per project
    #[arg(long, value_name = "DIR")]
    pub certificates: PathBuf,

    /// Request URL used for domain allow-lists
    #[arg(short, long)]
    pub url: Option<String>,

    /// Do not verify server certificates
    #[arg(long)]
    pub insecure: bool,

    /// Do not present a client certificate
    #[arg(long)]
    pub no_client_certificate: bool,

    /// Do not follow redirects
    #[arg(long)]
    pub no_redirects: bool,
}
