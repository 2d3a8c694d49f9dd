use std::fs;
use std::io::{
    BufRead,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use crossterm::style::Attribute;

use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    Display,
    File,
}

impl OutputTarget {
    /*
     * Map the single-character prompt response to a sink
     */
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim().to_lowercase().as_str() {
            "d" => Some(OutputTarget::Display),
            "f" => Some(OutputTarget::File),
            _ => None,
        }
    }
}

/*
 * Print the decoded block to the terminal, gated behind a confirmation
 * since raw blocks easily reach a few megabytes of text
 */
pub fn write_display(
    block_hash: &str,
    text: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), CliError> {
    writeln!(output, "Warning: the decoded block can be very large.")?;
    write!(output, "Press enter to display it: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    writeln!(
        output,
        "\n{}Block: {}{}",
        Attribute::Bold,
        block_hash,
        Attribute::Reset
    )?;
    writeln!(output, "{}", text)?;

    Ok(())
}

/*
 * Write the decoded block into the given directory, truncating any
 * previous output for the same hash
 */
pub fn write_file(dir: &Path, block_hash: &str, text: &str) -> Result<PathBuf, CliError> {
    let path = dir.join(format!("{}_output.txt", block_hash));

    fs::write(&path, text)?;

    Ok(path)
}
