use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use edge_auth::TokenRequest;
use edge_token::configuration::{ProfileError, TokenProfile};

#[derive(Parser)]
#[command(name = "edge-token")]
#[command(version, about = "Mint edge authorization tokens from a YAML profile", long_about = None)]
struct Cli {
    /// Token profile (YAML)
    #[arg(short, long, default_value = "token.yaml")]
    conf: PathBuf,

    /// Sign a single URL
    #[arg(long, conflicts_with = "acl", required_unless_present = "acl")]
    url: Option<String>,

    /// Sign an ACL path; repeat to allow several paths
    #[arg(long)]
    acl: Vec<String>,

    /// Session ID (overrides profile)
    #[arg(long)]
    session_id: Option<String>,

    /// Payload (overrides profile)
    #[arg(long)]
    payload: Option<String>,

    /// Percent-encode paths before signing
    #[arg(long)]
    escape_early: bool,
}

fn main() -> ExitCode {
    // Errors are always shown; set RUST_LOG=debug to see minted tokens.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match mint(&cli) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn mint(cli: &Cli) -> Result<String, ProfileError> {
    let profile = TokenProfile::load(&cli.conf)?;
    log::info!("Loaded token profile from {:?}", cli.conf);

    let mut builder = profile.builder()?;
    if let Some(session_id) = &cli.session_id {
        builder = builder.with_session_id(session_id.clone());
    }
    if let Some(payload) = &cli.payload {
        builder = builder.with_payload(payload.clone());
    }
    if cli.escape_early {
        builder = builder.with_escape_early(true);
    }
    let config = builder.build()?;

    let request = match &cli.url {
        Some(url) => TokenRequest::url(url.clone()),
        None => TokenRequest::acl_list(cli.acl.iter().cloned()),
    };
    let token = config.generate_token(&request)?;

    Ok(format!("{}={}", config.token_name(), token))
}
