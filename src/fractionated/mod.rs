//! Fractionated ciphers: coordinate streams split and re-read.
//!
//! Bifid and Trifid look every letter up in a keyed grid, write out
//! each coordinate axis as its own run, and re-read the combined
//! digit stream in grid-sized groups. Splitting a letter's
//! coordinates across distant ciphertext positions is what defeats
//! single-letter frequency analysis.
//!
//! Both ciphers work over English letters only, like the digram
//! engines: Bifid folds `j` onto `i` for its 5×5 square, Trifid adds
//! `+` as a 27th symbol to fill its 3×3×3 cube exactly.

pub mod bifid;
pub mod trifid;
