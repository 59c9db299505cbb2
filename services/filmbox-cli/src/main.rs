//! FilmBox command-line client.
//!
//! Browses the catalog and places orders against the same backend as the web
//! storefront. The session is kept in a JSON file between runs.
//!
//! ```bash
//! filmbox catalog
//! filmbox login -e anna@example.com -p 'Secret#12'
//! filmbox order 603 --format digital-4k
//! filmbox orders
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::Parser;
use fb_api_client::ClientConfig;
use fb_session::FileStorage;
use fb_storefront_core::Storefront;
use fb_transport_reqwest::ReqwestTransport;
use std::path::PathBuf;
use tracing::debug;

mod commands;

use commands::Command;

#[derive(Parser)]
#[command(name = "filmbox")]
#[command(author, version, about = "FilmBox storefront client")]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "FILMBOX_API_URL", global = true)]
    api_url: Option<String>,

    /// Where the session token and profile are stored
    #[arg(
        long,
        env = "FILMBOX_SESSION_FILE",
        default_value = ".filmbox-session.json",
        global = true
    )]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_override(cli.api_url.as_deref());
    debug!(
        "api base {}, session file {}",
        config.api_base(),
        cli.session_file.display()
    );

    let shop = Storefront::new(
        ReqwestTransport::new(),
        FileStorage::new(cli.session_file),
        config,
    );

    let output = commands::run(&shop, cli.command).await?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "filmbox",
            "order",
            "603",
            "--format",
            "digital-atmos",
            "--api-url",
            "http://localhost:3000",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:3000"));
        assert!(matches!(cli.command, Command::Order { .. }));
    }
}
