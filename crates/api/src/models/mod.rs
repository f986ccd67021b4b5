pub mod collision;
pub mod discriminator;
pub mod member;
pub mod types;

pub use collision::*;
pub use discriminator::*;
pub use member::*;
pub use types::*;
