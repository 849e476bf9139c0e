//! A module containing [`List`] and associated types.
//!
//! A [`List`] is made up of [`Slot`]s, each of which owns a type-erased value alongside the
//! [`TypeTag`] of the type it was created from. Keeping the two in a single record means that no
//! operation can reorder values without reordering their tags.
//!
//! [`List`] is also re-exported under the parent module.

mod error;
mod list;
mod render;
mod slot;
mod tests;

pub use error::*;
pub use list::*;
pub use slot::*;
