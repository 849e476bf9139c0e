pub mod error;
pub mod panic;
pub mod result;
