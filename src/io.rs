//! Python-style printing of several values at once.

use std::fmt::Display;
use std::io::{self, Write};

/// Writes each of `objects` to `out`, separated by `sep` and followed by `end`.
///
/// # Errors
/// Returns any error raised by `out`.
///
/// # Examples
/// ```
/// # use pylike::io::print_to;
/// let mut out = Vec::new();
/// print_to(&mut out, &[&1, &"two", &3.5], ", ", ".\n").unwrap();
/// assert_eq!(out, b"1, two, 3.5.\n");
/// ```
pub fn print_to<W: Write + ?Sized>(
    out: &mut W,
    objects: &[&dyn Display],
    sep: &str,
    end: &str,
) -> io::Result<()> {
    for (i, object) in objects.iter().enumerate() {
        if i > 0 {
            out.write_all(sep.as_bytes())?;
        }
        write!(out, "{}", object)?;
    }
    out.write_all(end.as_bytes())
}

/// Prints each of `objects` to standard output, separated by `sep` and followed by `end`.
///
/// # Errors
/// Returns any error raised while writing to standard output.
pub fn print(objects: &[&dyn Display], sep: &str, end: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    print_to(&mut stdout, objects, sep, end)?;
    stdout.flush()
}

/// Prints each of `objects` to standard output separated by spaces and followed by a newline, as
/// Python's `print` does by default.
///
/// # Errors
/// Returns any error raised while writing to standard output.
pub fn print_line(objects: &[&dyn Display]) -> io::Result<()> {
    print(objects, " ", "\n")
}
