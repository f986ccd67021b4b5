pub mod canonical;
pub mod disambiguation;
pub mod error;
pub mod logging;
pub mod model;
pub mod options;
pub mod snippet;

pub use error::{HookgenError, Result};
pub use options::CodegenOptions;
pub use snippet::CodeGenerator;
