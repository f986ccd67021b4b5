pub mod reference;
pub mod symbols;
pub mod type_parser;

pub use reference::{Declaration, MemberRef, NodeRef};
pub use symbols::SymbolModel;
