//! Predicates for checking the existence of and permissions for a file, using the real user and
//! group IDs of the process as `access(2)` does.
//!
//! Names that can't be passed to the OS, because they contain a nul byte, never exist and have
//! no permissions.

use std::ffi::CStr;
use std::path::Path;

use derive_more::Display;
use libc::{F_OK, R_OK, W_OK, X_OK, c_int};

use super::syscall;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    #[display("present")]
    Exists,
    #[display("readable")]
    Readable,
    #[display("writable")]
    Writable,
    #[display("executable")]
    Executable,
    #[display("readable and writable")]
    ReadWrite,
}

impl Permission {
    const fn bits(self) -> c_int {
        match self {
            Permission::Exists => F_OK,
            Permission::Readable => R_OK,
            Permission::Writable => W_OK,
            Permission::Executable => X_OK,
            Permission::ReadWrite => R_OK | W_OK,
        }
    }
}

pub(crate) fn access(path: &CStr, permission: Permission) -> bool {
    // SAFETY: path is a valid nul-terminated string which outlives the call.
    unsafe { libc::access(path.as_ptr(), permission.bits()) == 0 }
}

/// Checks whether the file at `name` grants `permission`.
pub fn has_permission<P: AsRef<Path>>(name: P, permission: Permission) -> bool {
    syscall::c_path(name.as_ref()).is_ok_and(|path| access(&path, permission))
}

pub fn exists<P: AsRef<Path>>(name: P) -> bool {
    has_permission(name, Permission::Exists)
}

pub fn is_readable<P: AsRef<Path>>(name: P) -> bool {
    has_permission(name, Permission::Readable)
}

pub fn is_writable<P: AsRef<Path>>(name: P) -> bool {
    has_permission(name, Permission::Writable)
}

pub fn is_executable<P: AsRef<Path>>(name: P) -> bool {
    has_permission(name, Permission::Executable)
}

/// Checks that the file at `name` is both readable and writable.
pub fn check_permission<P: AsRef<Path>>(name: P) -> bool {
    has_permission(name, Permission::ReadWrite)
}
