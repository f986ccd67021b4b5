//! Flat, immutable descriptors shared by the hook code generator.
//!
//! Hosts translate their own symbol graphs into these types before asking
//! the generator for anything.

pub mod models;

pub use models::*;
