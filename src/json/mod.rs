//! Loading and saving JSON documents as opaque text.
//!
//! No parsing or validation takes place: the contents of the file are handed back exactly as they
//! were written, making these functions equivalent to reading or writing the whole file with
//! [`File`]. They exist to give that intent a name.

use std::path::Path;

use derive_more::{Display, Error, From, IsVariant};

use crate::fs::file::{OpenError, ReadError, WriteError};
use crate::fs::{File, OpenMode};
use crate::text::Text;


#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum LoadJsonError {
    Open(OpenError),
    Read(ReadError),
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum SaveJsonError {
    Open(OpenError),
    Write(WriteError),
}

/// Returns the entire contents of the JSON file at `name`.
///
/// # Errors
/// Fails in the same way as opening the file with [`OpenMode::Read`] and reading it as text.
///
/// # Examples
/// ```
/// # use pylike::json::{load_json, save_json};
/// # let dir = tempfile::tempdir().unwrap();
/// # let path = dir.path().join("config.json");
/// let document = r#"{"name": "pylike", "tags": []}"#;
/// assert_eq!(save_json(&path, document)?, document.len());
/// assert_eq!(load_json(&path)?, document);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn load_json<P: AsRef<Path>>(name: P) -> Result<Text, LoadJsonError> {
    let file = File::open(name, OpenMode::Read)?;
    Ok(file.read_to_text()?)
}

/// Writes `json` verbatim to the file at `name`, creating or truncating it, and returns the number
/// of bytes written.
///
/// # Errors
/// Fails in the same way as opening the file with [`OpenMode::Write`] and writing to it.
pub fn save_json<P: AsRef<Path>, S: AsRef<str>>(name: P, json: S) -> Result<usize, SaveJsonError> {
    let file = File::open(name, OpenMode::Write)?;
    Ok(file.write(json.as_ref())?)
}
