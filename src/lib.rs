//! A handful of Python-style conveniences, written as an ordinary Rust library.
//!
//! # Purpose
//! Some things are just more pleasant in Python: a list that holds whatever you put in it, string
//! methods with familiar names, templates filled in at runtime and reading a whole file in one
//! call. This crate provides those, while still reporting every failure as a typed error rather
//! than an exception.
//!
//! # Contents
//! - [`collections::list::List`]: a heterogeneous list, where each element remembers its type.
//! - [`text::Text`]: an owned string with `str`-like helpers and `{}` template formatting.
//! - [`fs`]: whole-file reading and writing, plus existence and permission predicates.
//! - [`json`]: loading and saving JSON documents as opaque text.
//! - [`io`]: printing several values with a separator, like Python's `print`.
//!
//! # Error Handling
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs that implement
//! [`Error`](std::error::Error). Each operation returns an enum of only the errors it can produce,
//! and the leaf errors carry the offending file name, index or value in their message.
//!
//! Indexing a [`List`](collections::list::List) with `[]` is the one place that panics, mirroring
//! [`Vec`]. The [`slot`](collections::list::List::slot) method is the fallible alternative.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers and is only available on Unix.
//! Diagnostics are emitted through the `log` facade; no logger is installed by this crate.
//!
//! This crate also depends on some derive macros because they're helpful and remove the need for
//! some very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "fs")]
pub mod fs;
#[cfg(feature = "io")]
pub mod io;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "text")]
pub mod text;

pub(crate) mod util;

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
