use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Deref};

use super::{Arguments, FormatError, format};

/// An owned, immutable-by-default string with helpers modelled on Python's `str`.
///
/// Methods that would "modify" a Text, such as [`upper`](Text::upper), return a new instance and
/// leave the original untouched. All lengths and offsets are in bytes, as with [`str`].
///
/// # Examples
/// ```
/// # use pylike::text::Text;
/// let text = Text::from("Hello") + " world";
/// assert_eq!(text.len(), 11);
/// assert_eq!(text.upper(), "HELLO WORLD");
/// assert!(text.startswith("Hell"));
/// assert_eq!(text.find("world"), Some(6));
/// assert_eq!(text.find("moon"), None);
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text {
    inner: String,
}

impl Text {
    pub const fn new() -> Text {
        Text { inner: String::new() }
    }

    /// Returns the length of the Text in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns a copy of the Text with all characters converted to uppercase.
    pub fn upper(&self) -> Text {
        Text::from(self.inner.to_uppercase())
    }

    /// Returns a copy of the Text with all characters converted to lowercase.
    pub fn lower(&self) -> Text {
        Text::from(self.inner.to_lowercase())
    }

    pub fn startswith<P: AsRef<str>>(&self, prefix: P) -> bool {
        self.inner.starts_with(prefix.as_ref())
    }

    pub fn endswith<P: AsRef<str>>(&self, suffix: P) -> bool {
        self.inner.ends_with(suffix.as_ref())
    }

    /// Returns the byte offset of the first occurrence of `sub`, or [`None`] if it doesn't occur.
    /// An empty `sub` is found at offset 0.
    pub fn find<P: AsRef<str>>(&self, sub: P) -> Option<usize> {
        self.inner.find(sub.as_ref())
    }

    /// Uses the Text as a template, substituting the provided arguments into each `{}` field. See
    /// the [module documentation](super) for the template syntax.
    ///
    /// # Errors
    /// Returns a [`FormatError`] if the template is malformed, refers to an argument that wasn't
    /// provided, or requests a presentation that doesn't suit the argument.
    ///
    /// # Examples
    /// ```
    /// # use pylike::text_args;
    /// # use pylike::text::Text;
    /// let template = Text::from("{0}-{1}-{0} {name:>6}|{:x}");
    /// let text = template.format(&text_args!("a", "b", name = "end"));
    /// assert!(text.unwrap_err().is_mixed_indexing());
    ///
    /// let text = Text::from("{:<4}|{:^5}|{:+.2f}").format(&text_args!(1, "ab", 2.5_f64));
    /// assert_eq!(text.unwrap(), "1   | ab  |+2.50");
    /// ```
    pub fn format(&self, args: &Arguments<'_>) -> Result<Text, FormatError> {
        format::format(&self.inner, args).map(Text::from)
    }

    pub fn into_string(self) -> String {
        self.inner
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<[u8]> for Text {
    fn as_ref(&self) -> &[u8] {
        self.inner.as_bytes()
    }
}

impl Borrow<str> for Text {
    fn borrow(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text { inner: value.to_owned() }
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text { inner: value }
    }
}

impl From<Text> for String {
    fn from(value: Text) -> Self {
        value.inner
    }
}

impl FromIterator<char> for Text {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Text { inner: iter.into_iter().collect() }
    }
}

impl<T: AsRef<str>> Add<T> for Text {
    type Output = Text;

    fn add(mut self, rhs: T) -> Self::Output {
        self.inner.push_str(rhs.as_ref());
        self
    }
}

impl<T: AsRef<str>> Add<T> for &Text {
    type Output = Text;

    fn add(self, rhs: T) -> Self::Output {
        let rhs = rhs.as_ref();
        let mut inner = String::with_capacity(self.len() + rhs.len());
        inner.push_str(&self.inner);
        inner.push_str(rhs);
        Text { inner }
    }
}

impl<T: AsRef<str>> AddAssign<T> for Text {
    fn add_assign(&mut self, rhs: T) {
        self.inner.push_str(rhs.as_ref());
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl PartialEq<String> for Text {
    fn eq(&self, other: &String) -> bool {
        &self.inner == other
    }
}

impl PartialEq<Text> for str {
    fn eq(&self, other: &Text) -> bool {
        self == other.inner
    }
}

impl PartialEq<Text> for &str {
    fn eq(&self, other: &Text) -> bool {
        *self == other.inner
    }
}

impl Debug for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.inner, f)
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
