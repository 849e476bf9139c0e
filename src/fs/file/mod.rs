mod error;
mod file;
mod mode;
mod tests;

pub use error::*;
pub use file::*;
pub use mode::*;
