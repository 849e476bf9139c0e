use std::str::FromStr;

use derive_more::{Display, Error};
use libc::{O_APPEND, O_CLOEXEC, O_CREAT, O_RDONLY, O_RDWR, O_TRUNC, O_WRONLY, c_int};

/// The mode a [`File`](super::File) is opened with, matching the `fopen` mode strings.
///
/// | Mode | String | Access | Missing file | Existing file |
/// |-|-|-|-|-|
/// | `Read` | `r` | read | error | kept |
/// | `Write` | `w` | write | created | truncated |
/// | `Append` | `a` | write at end | created | kept |
/// | `ReadExtended` | `r+` | read, write | error | kept |
/// | `WriteExtended` | `w+` | read, write | created | truncated |
/// | `AppendExtended` | `a+` | read, write at end | created | kept |
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenMode {
    #[display("r")]
    Read,
    #[display("w")]
    Write,
    #[display("a")]
    Append,
    #[display("r+")]
    ReadExtended,
    #[display("w+")]
    WriteExtended,
    #[display("a+")]
    AppendExtended,
}

use OpenMode::*;

impl OpenMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Read => "r",
            Write => "w",
            Append => "a",
            ReadExtended => "r+",
            WriteExtended => "w+",
            AppendExtended => "a+",
        }
    }

    pub(crate) const fn flags(self) -> c_int {
        O_CLOEXEC | match self {
            Read => O_RDONLY,
            Write => O_WRONLY | O_CREAT | O_TRUNC,
            Append => O_WRONLY | O_CREAT | O_APPEND,
            ReadExtended => O_RDWR,
            WriteExtended => O_RDWR | O_CREAT | O_TRUNC,
            AppendExtended => O_RDWR | O_CREAT | O_APPEND,
        }
    }

    pub const fn is_readable(self) -> bool {
        !matches!(self, Write | Append)
    }

    pub const fn is_writable(self) -> bool {
        !matches!(self, Read)
    }

    /// Returns true for the modes which never create a file, and so require it to exist already.
    pub const fn requires_existing(self) -> bool {
        matches!(self, Read | ReadExtended)
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("'{mode}' is not a valid open mode")]
pub struct InvalidModeError {
    pub mode: String,
}

impl FromStr for OpenMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "r" => Read,
            "w" => Write,
            "a" => Append,
            "r+" => ReadExtended,
            "w+" => WriteExtended,
            "a+" => AppendExtended,
            _ => Err(InvalidModeError { mode: s.to_owned() })?,
        })
    }
}
