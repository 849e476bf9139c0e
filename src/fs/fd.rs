use std::ffi::CStr;
use std::fmt::{self, Debug, Formatter};
use std::mem::{ManuallyDrop, MaybeUninit};

use libc::{EBADF, EDQUOT, EINTR, EIO, ENOSPC, S_IFDIR, S_IFMT, c_int, c_uint, off_t, stat as Stat};

use crate::fs::error::{BadFdError, IOError, InterruptError, StorageExhaustedError, UnexpectedError};
use crate::fs::file::CloseError;
use crate::fs::syscall;

/// An owned file descriptor, closed when dropped. All methods are thin wrappers around the
/// matching syscall, returning the raw error number on failure so that callers can interpret it for
/// their own operation.
pub(crate) struct Fd(c_int);

impl Fd {
    pub fn open(path: &CStr, flags: c_int, mode: c_uint) -> Result<Fd, c_int> {
        // SAFETY: path is a valid nul-terminated string which outlives the call.
        match unsafe { libc::open(path.as_ptr(), flags, mode) } {
            -1 => Err(syscall::err_no()),
            fd => Ok(Fd(fd)),
        }
    }

    pub fn read(&self, buf: &mut [u8]) -> Result<usize, c_int> {
        // SAFETY: buf is valid for writes of buf.len() bytes and exclusively borrowed.
        match unsafe { libc::read(self.0, buf.as_mut_ptr().cast(), buf.len()) } {
            -1 => Err(syscall::err_no()),
            count => Ok(count as usize),
        }
    }

    pub fn write(&self, buf: &[u8]) -> Result<usize, c_int> {
        // SAFETY: buf is valid for reads of buf.len() bytes.
        match unsafe { libc::write(self.0, buf.as_ptr().cast(), buf.len()) } {
            -1 => Err(syscall::err_no()),
            count => Ok(count as usize),
        }
    }

    /// Returns true if the descriptor refers to a directory.
    pub fn is_directory(&self) -> Result<bool, c_int> {
        let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
        // SAFETY: raw_meta is valid for writes of a whole stat struct.
        if unsafe { libc::fstat(self.0, raw_meta.as_mut_ptr()) } == -1 {
            return Err(syscall::err_no());
        }
        // SAFETY: fstat succeeded, so raw_meta has been initialized.
        let raw = unsafe { raw_meta.assume_init() };
        Ok((raw.st_mode & S_IFMT) == S_IFDIR)
    }

    /// Moves the file offset, returning the new offset from the start of the file.
    pub fn seek(&self, offset: off_t, whence: c_int) -> Result<off_t, c_int> {
        // SAFETY: lseek has no memory safety requirements.
        match unsafe { libc::lseek(self.0, offset, whence) } {
            -1 => Err(syscall::err_no()),
            position => Ok(position),
        }
    }

    pub fn close(self) -> Result<(), CloseError> {
        // Closing invalidates the descriptor regardless of the outcome, so Drop must not run.
        let fd = ManuallyDrop::new(self);
        // SAFETY: fd is owned and not used again after this call.
        if unsafe { libc::close(fd.0) } == -1 {
            Err(close_error(syscall::err_no()))?
        }
        Ok(())
    }
}

fn close_error(code: c_int) -> CloseError {
    match code {
        EBADF =>           BadFdError.into(),
        EINTR =>           InterruptError.into(),
        EIO =>             IOError.into(),
        ENOSPC | EDQUOT => StorageExhaustedError.into(),
        e =>               UnexpectedError(e).into(),
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.0) } == -1 {
            log::warn!("error while dropping file descriptor {}: {}", self.0, close_error(syscall::err_no()));
        }
    }
}

impl Debug for Fd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({})", self.0)
    }
}
