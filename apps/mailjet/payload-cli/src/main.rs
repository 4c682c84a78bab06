//! Mailjet Payload
//!
//! Renders the Send API request body for a message document without sending
//! it. Useful to inspect how control headers are routed before wiring a
//! message into the mailer.

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use eyre::{Result, WrapErr};
use mailjet::{Envelope, MailjetApiTransport, MailjetConfig, Message};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "mailjet-payload")]
#[command(about = "Render Mailjet Send API payloads from message documents")]
struct Cli {
    /// API host (overrides MAILJET_HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the payload for a message document
    Render {
        /// JSON document with `envelope` and `message`. Reads stdin when omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Show the transport identifier and send endpoint
    Endpoint,
}

/// Input document: the message and the envelope it is delivered to
#[derive(Debug, Deserialize)]
struct Document {
    envelope: Envelope,
    message: Message,
}

fn main() -> Result<()> {
    install_color_eyre();
    init_tracing(Environment::from_env());

    let cli = Cli::parse();

    let mut config = MailjetConfig::from_env()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    let transport = MailjetApiTransport::new(config);

    match cli.command {
        Commands::Render { input, compact } => {
            let document = read_document(input.as_deref())?;
            println!("{}", render(&transport, &document, compact)?);
            info!(transport = %transport, "Rendered Mailjet payload");
        }

        Commands::Endpoint => {
            println!("{}", transport);
            println!("{}", transport.endpoint_url());
        }
    }

    Ok(())
}

fn read_document(path: Option<&Path>) -> Result<Document> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .wrap_err("Failed to read message document from stdin")?;
            raw
        }
    };

    serde_json::from_str(&raw).wrap_err("Invalid message document")
}

fn render(transport: &MailjetApiTransport, document: &Document, compact: bool) -> Result<String> {
    let payload = transport.payload(&document.message, &document.envelope)?;
    if compact {
        Ok(payload.to_json()?)
    } else {
        Ok(serde_json::to_string_pretty(&payload)?)
    }
}
