use std::io::{
    stdin,
    stdout,
    Write,
};
use std::path::Path;
use std::process::exit;

use argh::FromArgs;
use blockfetcher::{
    BlockClient,
    CliError,
};
use crossterm::style::Attribute;
use tracing_subscriber::EnvFilter;

/// Fetch a block from the blockchain.info explorer and render its raw
/// serialization as text.
#[derive(Debug, FromArgs)]
struct Cli {
    /// hash of the block to fetch
    #[argh(positional)]
    block_hash: String,
}

#[tokio::main]
async fn main() {
    // Quiet by default so log lines don't fight the spinner redraws
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli: Cli = argh::from_env();

    if let Err(error) = run(cli).await {
        tracing::error!("{}", error);
        eprintln!("Error: {}", error);
        exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    println!(
        "{}Block: {}{}",
        Attribute::Bold,
        cli.block_hash,
        Attribute::Reset
    );

    let choice = prompt_choice()?;

    let client = BlockClient::new();

    blockfetcher::run(
        &client,
        &cli.block_hash,
        &choice,
        &mut stdin().lock(),
        &mut stdout(),
        Path::new("."),
    )
    .await?;

    Ok(())
}

fn prompt_choice() -> Result<String, CliError> {
    print!("Display on the terminal or save to a file? (d/f): ");
    stdout().flush()?;

    let mut choice = String::new();
    stdin().read_line(&mut choice)?;

    Ok(choice)
}
