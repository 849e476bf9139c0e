use std::path::{Path, PathBuf};

use libc::{EBADF, EDQUOT, EFBIG, EINTR, EIO, EISDIR, ENOSPC, SEEK_END, SEEK_SET, c_int, c_uint};

use super::{CloseError, OpenError, OpenMode, ReadError, WriteError};
use crate::fs::error::{
    BadFdError, FileNotFoundError, IOError, InterruptError, InvalidNameError, InvalidUtf8Error,
    IsDirectoryError, NotReadableError, NotWritableError, PermissionDeniedError, ShortWriteError,
    StorageExhaustedError, UnexpectedError, UnknownOpenError,
};
use crate::fs::permission::{self, Permission};
use crate::fs::{Fd, syscall};
use crate::text::Text;

/// Permissions given to files created by [`File::open`], before the process umask is applied.
pub const CREATE_MODE: c_uint = 0o644;

const READ_CHUNK: usize = 8 * 1024;

/// The largest buffer allocated up front from the reported size of a file.
const SIZE_HINT_LIMIT: usize = 64 * 1024 * 1024;

/// An open file, owning its file descriptor exclusively and remembering the name it was opened
/// with for error messages. The file is closed when dropped, although [`close`](File::close) can
/// be used to observe any errors while doing so.
///
/// # Examples
/// ```
/// # use pylike::fs::{File, OpenMode};
/// # let dir = tempfile::tempdir().unwrap();
/// # let path = dir.path().join("notes.txt");
/// let file = File::open(&path, OpenMode::WriteExtended)?;
/// assert_eq!(file.write("hello")?, 5);
/// assert_eq!(file.read_to_text()?, "hello");
/// file.close()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct File {
    fd: Fd,
    path: PathBuf,
    mode: OpenMode,
}

impl File {
    /// Opens the file at `name` with the provided mode.
    ///
    /// For the modes which require the file to exist ([`Read`](OpenMode::Read) and
    /// [`ReadExtended`](OpenMode::ReadExtended)), existence and permissions are checked before the
    /// file is opened. `Read` requires read permission only, so a read-only file can still be opened
    /// with it, while `ReadExtended` requires both read and write permission. Files that are created
    /// get the permissions [`CREATE_MODE`].
    ///
    /// # Errors
    /// - [`FileNotFoundError`] if the file must exist but doesn't.
    /// - [`PermissionDeniedError`] if the file must exist and lacks the required permissions.
    /// - [`InvalidNameError`] if the name contains a nul byte.
    /// - [`UnknownOpenError`] if the OS refuses to open the file for any other reason.
    pub fn open<P: AsRef<Path>>(name: P, mode: OpenMode) -> Result<File, OpenError> {
        let path = name.as_ref();
        let display = || path.display().to_string();
        let c_path = syscall::c_path(path).map_err(|_| InvalidNameError { name: display() })?;

        if mode.requires_existing() {
            if !permission::access(&c_path, Permission::Exists) {
                Err(FileNotFoundError { name: display() })?
            }

            let required = match mode {
                OpenMode::Read => Permission::Readable,
                _ => Permission::ReadWrite,
            };
            if !permission::access(&c_path, required) {
                Err(PermissionDeniedError { name: display(), permission: required })?
            }
        }

        log::debug!("opening '{}' with mode '{}'", path.display(), mode);
        let fd = Fd::open(&c_path, mode.flags(), CREATE_MODE)
            .map_err(|code| UnknownOpenError { name: display(), code })?;

        Ok(File {
            fd,
            path: path.to_owned(),
            mode,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Reads the entire file from the start, regardless of the current offset. The size of the
    /// file is used to size the buffer, but reading continues until the end of the file in case
    /// it changes in the meantime.
    ///
    /// # Errors
    /// Returns [`NotReadableError`] if the file's mode doesn't permit reading and
    /// [`IsDirectoryError`] if the file is a directory, otherwise any errors raised by the OS.
    pub fn read_all(&self) -> Result<Vec<u8>, ReadError> {
        if !self.mode.is_readable() {
            Err(NotReadableError { name: self.name(), mode: self.mode })?
        }
        if self.fd.is_directory().map_err(|e| self.read_error(e))? {
            Err(IsDirectoryError { name: self.name() })?
        }

        let size = self.fd.seek(0, SEEK_END).map_err(|e| self.read_error(e))?;
        self.fd.seek(0, SEEK_SET).map_err(|e| self.read_error(e))?;

        // The size is only a hint, so fall back to growing as we go if it can't be allocated.
        let hint = usize::try_from(size).unwrap_or(0).min(SIZE_HINT_LIMIT);
        let mut buf: Vec<u8> = Vec::new();
        match buf.try_reserve_exact(hint) {
            Ok(()) => buf.resize(hint, 0),
            Err(e) => log::debug!("ignoring size hint of {} bytes for '{}': {}", hint, self.path.display(), e),
        }
        let mut filled = 0;
        loop {
            if filled == buf.len() {
                buf.resize(filled + READ_CHUNK, 0);
            }
            match self.fd.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(count) => filled += count,
                Err(e) => Err(self.read_error(e))?,
            }
        }
        buf.truncate(filled);

        log::trace!("read {} bytes from '{}'", filled, self.path.display());
        Ok(buf)
    }

    /// Reads the entire file as with [`read_all`](File::read_all), decoding it as UTF-8.
    ///
    /// # Errors
    /// Returns [`InvalidUtf8Error`] if the contents aren't valid UTF-8, as well as any of the
    /// errors from `read_all`.
    pub fn read_to_text(&self) -> Result<Text, ReadError> {
        let bytes = self.read_all()?;
        String::from_utf8(bytes)
            .map(Text::from)
            .map_err(|_| InvalidUtf8Error { name: self.name() }.into())
    }

    /// Writes all of `data` to the file with a single write, returning the number of bytes
    /// written.
    ///
    /// # Errors
    /// Returns [`ShortWriteError`] if fewer bytes were written than provided and
    /// [`NotWritableError`] if the file's mode doesn't permit writing, otherwise any errors raised
    /// by the OS.
    pub fn write<B: AsRef<[u8]>>(&self, data: B) -> Result<usize, WriteError> {
        let data = data.as_ref();
        if !self.mode.is_writable() {
            Err(NotWritableError { name: self.name(), mode: self.mode })?
        }

        let written = self.fd.write(data).map_err(|code| match code {
            EBADF =>                   WriteError::from(BadFdError),
            EINTR =>                   InterruptError.into(),
            EIO =>                     IOError.into(),
            ENOSPC | EDQUOT | EFBIG => StorageExhaustedError.into(),
            e =>                       UnexpectedError(e).into(),
        })?;

        log::trace!("wrote {} of {} bytes to '{}'", written, data.len(), self.path.display());
        if written != data.len() {
            Err(ShortWriteError {
                name: self.name(),
                expected: data.len(),
                written,
            })?
        }
        Ok(written)
    }

    /// Closes the file, returning any error raised while doing so. Dropping a File closes it too,
    /// but only logs such errors.
    ///
    /// # Errors
    /// Returns a [`CloseError`] if the OS reports a failure, in which case the file descriptor is
    /// still released.
    pub fn close(self) -> Result<(), CloseError> {
        log::debug!("closing '{}'", self.path.display());
        self.fd.close()
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_error(&self, code: c_int) -> ReadError {
        match code {
            EBADF =>  BadFdError.into(),
            EINTR =>  InterruptError.into(),
            EIO =>    IOError.into(),
            EISDIR => IsDirectoryError { name: self.name() }.into(),
            e =>      UnexpectedError(e).into(),
        }
    }
}
