//! Classical cipher toolkit.
//!
//! A library of pre-modern ciphers offering encryption, decryption,
//! and key/table generation over an English 26-letter and a Turkish
//! 29-letter alphabet. These schemes are pedagogical, not secure.
//!
//! # Architecture
//!
//! ```text
//! alphabet / math          (leaves — normalisation, modular arithmetic)
//!     ↕
//! transform / polybius / checkerboard / columnar   (building blocks)
//!     ↕
//! digram / fractionated / hill / reihenschieber / porta
//!     ↕
//! composite (ADFGVX, Nihilist, VIC)                (pipelines)
//! ```
//!
//! The `keygen` module produces random keys against an injected
//! random source.
//!
//! # Examples
//!
//! Encrypt and decrypt with Playfair:
//!
//! ```
//! use cryptology::digram::playfair;
//!
//! let ct = playfair::encrypt("HELLO WORLD", "monarchy").unwrap();
//! assert_eq!(playfair::decrypt(&ct, "monarchy").unwrap(), "helxloworldx");
//! ```
//!
//! Run the ADFGVX pipeline over a keyword square:
//!
//! ```
//! use cryptology::composite::adfgvx::{self, AdfgvxConfig};
//! use cryptology::polybius::SquareSpec;
//!
//! let cfg = AdfgvxConfig {
//!     square: SquareSpec::Keyword("nachtbommenwerper".into()),
//!     ..AdfgvxConfig::default()
//! };
//! let ct = adfgvx::encrypt("munitionierung beschleunigen", "mark", &cfg).unwrap();
//! let pt = adfgvx::decrypt(&ct, "mark", &cfg).unwrap();
//! assert_eq!(pt, "munitionierungbeschleunigen");
//! ```

#![deny(clippy::all)]

pub mod error;

pub mod alphabet;
pub mod checkerboard;
pub mod columnar;
pub mod composite;
pub mod digram;
pub mod fractionated;
pub mod hill;
pub mod keygen;
pub mod math;
pub mod polybius;
pub mod porta;
pub mod reihenschieber;
pub mod transform;

pub use alphabet::{Alphabet, AlphabetId};
pub use error::{CipherError, Result};
