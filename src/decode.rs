use crate::CliError;

/*
 * Decode the whitespace-trimmed hex payload into raw bytes
 */
pub fn hex_to_bytes(payload: &str) -> Result<Vec<u8>, CliError> {
    Ok(hex::decode(payload.trim())?)
}

/*
 * UTF-8 decode that drops invalid sequences instead of replacing them
 * with U+FFFD. Raw blocks are mostly binary, so this is deliberately
 * lossy in favour of a readable best-effort rendering.
 */
pub fn bytes_to_text(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                break;
            }
            Err(error) => {
                let valid_up_to = error.valid_up_to();

                if let Ok(valid) = std::str::from_utf8(&rest[..valid_up_to]) {
                    text.push_str(valid);
                }

                // error_len is None when the input ends mid-sequence
                let invalid_len = match error.error_len() {
                    Some(len) => len,
                    None => break,
                };

                rest = &rest[valid_up_to + invalid_len..];
            }
        }
    }

    text
}

pub fn hex_to_text(payload: &str) -> Result<String, CliError> {
    Ok(bytes_to_text(&hex_to_bytes(payload)?))
}
