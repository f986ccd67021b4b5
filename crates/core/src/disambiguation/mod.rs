//! Method disambiguation.
//!
//! Obfuscated classes often carry several methods with the same name and
//! erased parameter types. The engine picks additional filters that make a
//! generated finder chain match exactly one of them.

pub mod combinations;
pub mod engine;

pub use engine::{DisambiguationOptions, disambiguate};
