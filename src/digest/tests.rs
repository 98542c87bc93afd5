use super::*;

use std::io;
use std::io::Write;

use crate::sha256::hash;

#[test]
fn hex_is_64_lowercase_characters() {
    let hex = hash(b"abc").to_hex();
    assert_eq!(hex.len(), 64);
    assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
}

#[test]
fn hex_round_trip() {
    let digest = hash(b"formatting must not lose information");
    let decoded = hex::decode(digest.to_hex()).unwrap();
    assert_eq!(&decoded[..], &digest.as_bytes()[..]);
}

#[test]
fn consuming_hex_matches_borrowing_hex() {
    let digest = hash(b"abc");
    assert_eq!(digest.to_hex(), digest.into_hex());
}

#[test]
fn leading_zero_bytes_keep_full_width() {
    // 0x00 bytes must still produce two hex digits each.
    let digest = Digest::from([0u8; HASHBYTES]);
    assert_eq!(digest.to_hex(), "0".repeat(64));
}

#[test]
fn dump_writes_one_byte_per_line() {
    let digest = hash(b"abc");
    let mut sink = Vec::new();
    digest.dump(&mut sink).unwrap();
    let text = String::from_utf8(sink).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), HASHBYTES);
    assert!(lines.iter().all(|line| line.len() == 2));
    assert_eq!(lines.concat(), digest.to_hex());
    assert!(text.ends_with('\n'));
}

#[test]
fn dump_propagates_sink_errors() {
    struct BrokenSink;
    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink is broken"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
    assert!(hash(b"abc").dump(&mut BrokenSink).is_err());
}

#[test]
fn display_and_debug() {
    let digest = hash(b"abc");
    assert_eq!(format!("{}", digest), digest.to_hex());
    assert_eq!(format!("{:?}", digest), format!("Digest({})", digest.to_hex()));
}

#[test]
fn value_semantics() {
    let digest = hash(b"abc");
    let copy = digest;
    assert_eq!(copy, digest);
    assert_eq!(copy.to_bytes(), *digest.as_bytes());
    assert_eq!(Digest::from(digest.to_bytes()), digest);
}
