//! An owned string type with helpers modelled on Python's `str`, plus `{}`-style template
//! formatting at runtime.
//!
//! # Formatting
//! [`Text::format`] treats the Text as a template, replacing each `{...}` field with one of the
//! provided [`Arguments`]. Fields can refer to arguments automatically (`{}`), by position (`{0}`)
//! or by name (`{name}`), and may carry a spec after a colon, such as `{:>8.2f}`. Literal braces are
//! written as `{{` and `}}`. Unlike [`format!`], templates are only checked when used, so all
//! problems are reported as a [`FormatError`].

mod args;
mod error;
mod format;
mod text;
mod tests;

pub use args::*;
pub use error::*;
pub use text::*;
