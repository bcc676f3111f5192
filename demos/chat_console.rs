//! Interactive console chat with provider and mode switching.
//!
//! The console analog of a chat UI in front of the gateway: every submitted
//! line re-resolves the routing configuration from the current environment
//! and the current toggles, so switching provider or enterprise mode takes
//! effect on the next send. One invocation is in flight at a time.
//!
//! Commands:
//!   :provider azure|gemini    select the provider
//!   :enterprise on|off|auto   force the routing mode (auto = by key presence)
//!   :quit                     exit

use std::io::{BufRead, Write};

use aether_connect::prelude::*;
use tracing_subscriber::EnvFilter;

fn prompt_line(provider: ProviderKind, mode: &str) -> String {
    format!("[{provider} | {mode}] > ")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let stdin = std::io::stdin();
    let mut provider = ProviderKind::AzureOpenAi;
    let mut mode_override: Option<RoutingMode> = None;

    println!("Aether chat console. :provider, :enterprise, :quit");
    loop {
        let mode_label = match mode_override {
            Some(RoutingMode::Enterprise) => "enterprise",
            Some(RoutingMode::Direct) => "direct",
            None => "auto",
        };
        print!("{}", prompt_line(provider, mode_label));
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix(':') {
            let mut words = rest.split_whitespace();
            match (words.next(), words.next()) {
                (Some("quit"), _) => break,
                (Some("provider"), Some(name)) => match name.parse() {
                    Ok(kind) => provider = kind,
                    Err(err) => println!("{err}"),
                },
                (Some("enterprise"), Some("on")) => {
                    mode_override = Some(RoutingMode::Enterprise);
                }
                (Some("enterprise"), Some("off")) => mode_override = Some(RoutingMode::Direct),
                (Some("enterprise"), Some("auto")) => mode_override = None,
                _ => println!("unknown command: {line}"),
            }
            continue;
        }

        // Re-resolve from current state on every send.
        let mut resolver = ConfigResolver::from_env();
        if let Some(mode) = mode_override {
            resolver = resolver.with_mode(mode);
        }
        let config = match resolver.resolve(provider) {
            Ok(config) => config,
            Err(err) => {
                println!("configuration error: {err}");
                continue;
            }
        };

        match send_prompt(&config, line).await {
            Ok(response) => println!("{}", response.content),
            Err(err) if err.is_provider_error() => println!("provider error: {err}"),
            Err(err) => println!("configuration error: {err}"),
        }
    }

    Ok(())
}
