//! The [`Digest`](struct.Digest.html) value type and its formatting
//! operations.

use std::fmt;
use std::io;
use std::io::Write;

use crate::sha256::HASHBYTES;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A finished SHA-256 digest: exactly 32 bytes, immutable once produced.
/// It is a plain value; copy it freely.
///
/// ```rust
/// let digest = digest256::hash(b"abc");
/// assert_eq!(digest.as_bytes()[0], 0xba);
/// assert_eq!(digest.to_hex().len(), 64);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Digest([u8; HASHBYTES]);

impl Digest {
    /// Borrow the 32 digest bytes.
    pub fn as_bytes(&self) -> &[u8; HASHBYTES] {
        &self.0
    }

    /// Copy the 32 digest bytes out.
    pub fn to_bytes(self) -> [u8; HASHBYTES] {
        self.0
    }

    /// Encode the digest as exactly 64 lowercase hexadecimal characters,
    /// most-significant nibble of each byte first.
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(HASHBYTES * 2);
        for &byte in self.0.iter() {
            hex.push(HEX_DIGITS[(byte >> 4) as usize] as char);
            hex.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
        }
        hex
    }

    /// Like [`to_hex()`](#method.to_hex), but consumes the digest, for call
    /// chains that are done with the value afterwards.
    pub fn into_hex(self) -> String {
        self.to_hex()
    }

    /// Write a diagnostic dump to `sink`: each of the 32 digest bytes as
    /// its two-hex-digit form on its own line. Fails only if the sink
    /// itself fails.
    ///
    /// This is a distinct format from [`to_hex()`](#method.to_hex), which
    /// produces the usual single-line encoding.
    pub fn dump<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        for &byte in self.0.iter() {
            writeln!(sink, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl From<[u8; HASHBYTES]> for Digest {
    fn from(bytes: [u8; HASHBYTES]) -> Digest {
        Digest(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for &byte in self.0.iter() {
            write!(fmt, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Digest({})", self)
    }
}

#[cfg(test)]
mod tests;
