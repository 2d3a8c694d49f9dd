use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CliError {
    Input(String),
    Network(String),
    Decode(hex::FromHexError),
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Input(choice) => {
                write!(f, "Invalid choice '{}', expected 'd' or 'f'", choice)
            }
            CliError::Network(reason) => write!(f, "Could not fetch the block: {}", reason),
            CliError::Decode(error) => {
                write!(f, "The explorer returned an invalid hex payload: {}", error)
            }
            CliError::Io(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Decode(error) => Some(error),
            CliError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(error: reqwest::Error) -> Self {
        CliError::Network(error.to_string())
    }
}

impl From<hex::FromHexError> for CliError {
    fn from(error: hex::FromHexError) -> Self {
        CliError::Decode(error)
    }
}

impl From<io::Error> for CliError {
    fn from(error: io::Error) -> Self {
        CliError::Io(error)
    }
}
