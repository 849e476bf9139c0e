//! Thin wrappers for opening, reading and writing whole files, along with predicates for file
//! existence and permissions.
//!
//! This module relies on `libc` for its syscall wrappers rather than [`std::fs`], with each
//! operation returning an error enum containing only the failures it can actually produce.
//!
//! # Opening
//! Files are opened with one of the six [`OpenMode`]s, which correspond to the familiar `fopen`
//! mode strings. The modes that never create a file check that it exists and is accessible before
//! opening it, so that a missing file is reported as such rather than as a generic failure.
#![cfg(unix)]

pub mod file;
pub mod permission;

mod error;
mod fd;
mod syscall;

pub use error::*;
pub(crate) use fd::*;
pub use file::{File, OpenMode};
pub use permission::{check_permission, exists, is_executable, is_readable, is_writable, Permission};
