//! Simple bridge discovery that outputs JSON for scripting
//!
//! Usage: cargo run -p hue-sdk --example discover_bridges [strategy]

use hue_sdk::{discover_with, DiscoveryOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let strategy = std::env::args().nth(1).unwrap_or_else(|| "all".to_string());

    let bridges = discover_with(DiscoveryOptions::strategy(strategy)).await?;

    println!("{}", serde_json::to_string_pretty(&bridges)?);
    Ok(())
}
