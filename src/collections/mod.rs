//! Collection types.
//!
//! At the moment this is only [`List`], a heterogeneous list modelled on Python's `list`.

pub mod list;

pub use list::List;
