use std::io::{
    BufRead,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

mod client;
mod decode;
mod errors;
mod output;
mod spinner;

pub use client::BlockClient;
pub use decode::{
    bytes_to_text,
    hex_to_bytes,
    hex_to_text,
};
pub use errors::CliError;
pub use output::{
    write_display,
    write_file,
    OutputTarget,
};
pub use spinner::Spinner;

/*
 * Drive one fetch, decode and output cycle. The output-mode answer has
 * already been read by the caller and is validated before anything goes
 * over the wire. Returns the written path in file mode.
 */
pub async fn run(
    client: &BlockClient,
    block_hash: &str,
    choice: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
    dir: &Path,
) -> Result<Option<PathBuf>, CliError> {
    let target = OutputTarget::from_choice(choice)
        .ok_or_else(|| CliError::Input(choice.trim().to_string()))?;

    let spinner = Spinner::start("Fetching block");
    let fetch_result = client.fetch_raw_block(block_hash).await;
    spinner.stop().await;

    let payload = fetch_result?;

    tracing::info!("Fetched {} hex characters", payload.len());

    let text = hex_to_text(&payload)?;

    match target {
        OutputTarget::Display => {
            write_display(block_hash, &text, input, output)?;

            Ok(None)
        }
        OutputTarget::File => {
            let path = write_file(dir, block_hash, &text)?;

            writeln!(output, "Output written to {}", path.display())?;

            Ok(Some(path))
        }
    }
}
