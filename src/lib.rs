//! A pure, safe Rust implementation of the [SHA-256][1] cryptographic hash
//! function, reducing an arbitrary-length byte sequence to a fixed 32-byte
//! [`Digest`] via the Merkle–Damgård construction.
//!
//! The library is deliberately small. It runs with reasonable speed, uses
//! very little memory, performs no heap allocation while processing blocks
//! (only when formatting results), and is written 100% in safe Rust code.
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-2
//!
//! Usage
//! -----
//!
//! Add to your `Cargo.toml`, under `[dependencies]`:
//!
//! ```toml
//! digest256 = "0.1"
//! ```
//!
//! Then hash a buffer and format the result:
//!
//! ```rust
//! let digest = digest256::digest(b"abc")?;
//! assert_eq!(digest.to_hex(),
//!            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
//! # Ok::<(), digest256::Error>(())
//! ```
//!
//! [`digest()`][2] is the fallible entry point: it rejects empty input and
//! inputs too large for SHA-256's 64-bit bit-length field, rather than
//! producing a digest that is silently wrong. [`hash()`][3] is a panicking
//! convenience wrapper for callers that treat those conditions as
//! programming errors.
//!
//! [2]: fn.digest.html
//! [3]: fn.hash.html
//!
//! License
//! -------
//!
//! This library is distributed under the zlib license. This puts very few
//! restrictions on use. See `LICENSE.md` for the complete, very short text
//! of the license.

#![forbid(unsafe_code)]

#[macro_use]
extern crate arrayref;

mod digest;
mod error;
pub mod sha256;

pub use crate::digest::Digest;
pub use crate::error::Error;
pub use crate::sha256::{digest, hash};
