use derive_more::{Display, Error};
use libc::c_int;

use super::{OpenMode, Permission};

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("the file '{name}' does not exist")]
pub struct FileNotFoundError {
    pub name: String,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("the file '{name}' is not {permission}")]
pub struct PermissionDeniedError {
    pub name: String,
    pub permission: Permission,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("wrote {written} of {expected} bytes to the file '{name}'")]
pub struct ShortWriteError {
    pub name: String,
    pub expected: usize,
    pub written: usize,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("can't open the file '{name}' (os error {code})")]
pub struct UnknownOpenError {
    pub name: String,
    pub code: c_int,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("the name '{name}' contains a nul byte")]
pub struct InvalidNameError {
    pub name: String,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("the file '{name}' was opened with mode '{mode}', which doesn't allow reading")]
pub struct NotReadableError {
    pub name: String,
    pub mode: OpenMode,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("the file '{name}' was opened with mode '{mode}', which doesn't allow writing")]
pub struct NotWritableError {
    pub name: String,
    pub mode: OpenMode,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("the contents of the file '{name}' are not valid UTF-8")]
pub struct InvalidUtf8Error {
    pub name: String,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("'{name}' is a directory")]
pub struct IsDirectoryError {
    pub name: String,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("file descriptor corruption")]
pub struct BadFdError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedError(#[error(not(source))] pub c_int);
