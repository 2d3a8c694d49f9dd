use blockfetcher::{
    bytes_to_text,
    hex_to_bytes,
    hex_to_text,
    CliError,
};

#[test]
fn hex_round_trip() {
    assert_eq!(hex_to_text("68656c6c6f").unwrap(), "hello");
}

#[test]
fn trailing_whitespace_is_ignored() {
    assert_eq!(hex_to_text("68656c6c6f\n").unwrap(), "hello");
}

#[test]
fn invalid_utf8_bytes_are_dropped() {
    // "h", a lone continuation byte, "i"
    assert_eq!(bytes_to_text(&[0x68, 0x80, 0x69]), "hi");
}

#[test]
fn truncated_sequence_at_the_end_is_dropped() {
    // 0xE2 0x82 is an unfinished three-byte sequence
    assert_eq!(bytes_to_text(&[0x6f, 0x6b, 0xE2, 0x82]), "ok");
}

#[test]
fn multibyte_sequences_survive() {
    assert_eq!(bytes_to_text(&[0xE2, 0x82, 0xAC]), "€");
}

#[test]
fn consecutive_invalid_bytes_are_dropped() {
    assert_eq!(bytes_to_text(&[0xFF, 0xFE, 0x68, 0x69, 0x80]), "hi");
}

#[test]
fn invalid_hex_is_a_decode_error() {
    match hex_to_bytes("zz") {
        Err(CliError::Decode(_)) => {}
        other => panic!("expected a decode error, got {:?}", other),
    }
}

#[test]
fn odd_length_hex_is_a_decode_error() {
    assert!(matches!(hex_to_bytes("686"), Err(CliError::Decode(_))));
}
