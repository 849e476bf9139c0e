use derive_more::{Display, Error, From, IsVariant};

use crate::fs::error::*;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum OpenError {
    FileNotFound(FileNotFoundError),
    PermissionDenied(PermissionDeniedError),
    InvalidName(InvalidNameError),
    UnknownOpen(UnknownOpenError),
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum ReadError {
    NotReadable(NotReadableError),
    IsDirectory(IsDirectoryError),
    InvalidUtf8(InvalidUtf8Error),
    Interrupt(InterruptError),
    IO(IOError),
    BadFd(BadFdError),
    Unexpected(UnexpectedError),
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum WriteError {
    NotWritable(NotWritableError),
    ShortWrite(ShortWriteError),
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
    BadFd(BadFdError),
    Unexpected(UnexpectedError),
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum CloseError {
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
    BadFd(BadFdError),
    Unexpected(UnexpectedError),
}
