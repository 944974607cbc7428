//! Composite cipher pipelines.
//!
//! Each pipeline chains the crate's primitives in a fixed order with
//! stage-specific keys:
//!
//! ```text
//! ADFGVX    square substitution → columnar transposition
//! Nihilist  square coordinates → key-stream addition
//! VIC       checkerboard → square substitution → key stream → transpositions
//! ```

pub mod adfgvx;
pub mod nihilist;
pub mod vic;
