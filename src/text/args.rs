use std::borrow::Cow;

use derive_more::IsVariant;

use super::Text;

/// A single value that can be substituted into a template by [`Text::format`].
#[derive(Debug, Clone, PartialEq, IsVariant)]
pub enum Argument<'a> {
    Int(i128),
    UInt(u128),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(Cow<'a, str>),
}

impl Argument<'_> {
    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Argument::Int(_) | Argument::UInt(_) => "integer",
            Argument::Float(_) => "float",
            Argument::Bool(_) => "bool",
            Argument::Char(_) => "char",
            Argument::Str(_) => "string",
        }
    }
}

macro_rules! impl_from {
    ($variant:ident as $inner:ty: $($from:ty),+) => {
        $(
            impl From<$from> for Argument<'_> {
                fn from(value: $from) -> Self {
                    Argument::$variant(value as $inner)
                }
            }
        )+
    };
}

impl_from!(Int as i128: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
impl_from!(UInt as u128: u128);
impl_from!(Float as f64: f32, f64);

impl From<bool> for Argument<'_> {
    fn from(value: bool) -> Self {
        Argument::Bool(value)
    }
}

impl From<char> for Argument<'_> {
    fn from(value: char) -> Self {
        Argument::Char(value)
    }
}

impl<'a> From<&'a str> for Argument<'a> {
    fn from(value: &'a str) -> Self {
        Argument::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Argument<'a> {
    fn from(value: &'a String) -> Self {
        Argument::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Argument<'_> {
    fn from(value: String) -> Self {
        Argument::Str(Cow::Owned(value))
    }
}

impl<'a> From<&'a Text> for Argument<'a> {
    fn from(value: &'a Text) -> Self {
        Argument::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<Text> for Argument<'_> {
    fn from(value: Text) -> Self {
        Argument::Str(Cow::Owned(value.into()))
    }
}

/// The positional and named [`Argument`]s for a call to [`Text::format`]. Usually built with the
/// [`text_args!`](crate::text_args) macro.
///
/// # Examples
/// ```
/// # use pylike::text::{Arguments, Text};
/// let args = Arguments::new().with(3).with_named("unit", "apples");
/// let text = Text::from("{} {unit}").format(&args).unwrap();
/// assert_eq!(text, "3 apples");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments<'a> {
    positional: Vec<Argument<'a>>,
    named: Vec<(Cow<'a, str>, Argument<'a>)>,
}

impl<'a> Arguments<'a> {
    pub const fn new() -> Arguments<'a> {
        Arguments {
            positional: Vec::new(),
            named: Vec::new(),
        }
    }

    pub fn push<A: Into<Argument<'a>>>(&mut self, value: A) {
        self.positional.push(value.into());
    }

    /// Adds a named argument. If the name is already present, the new value replaces it.
    pub fn push_named<N, A>(&mut self, name: N, value: A)
    where
        N: Into<Cow<'a, str>>,
        A: Into<Argument<'a>>,
    {
        let name = name.into();
        let value = value.into();
        match self.named.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = value,
            None => self.named.push((name, value)),
        }
    }

    pub fn with<A: Into<Argument<'a>>>(mut self, value: A) -> Self {
        self.push(value);
        self
    }

    pub fn with_named<N, A>(mut self, name: N, value: A) -> Self
    where
        N: Into<Cow<'a, str>>,
        A: Into<Argument<'a>>,
    {
        self.push_named(name, value);
        self
    }

    pub fn positional(&self, index: usize) -> Option<&Argument<'a>> {
        self.positional.get(index)
    }

    pub fn named(&self, name: &str) -> Option<&Argument<'a>> {
        self.named.iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }
}

/// Builds [`Arguments`] from a list of positional values followed by (or mixed with) `name =
/// value` pairs.
///
/// # Examples
/// ```
/// # use pylike::text_args;
/// # use pylike::text::Text;
/// let args = text_args!("EasyText", 1.0_f64, minor = 2);
/// let text = Text::from("{} v{:.1f}.{minor}").format(&args).unwrap();
/// assert_eq!(text, "EasyText v1.0.2");
/// ```
#[macro_export]
macro_rules! text_args {
    (@push $args:ident;) => {};
    (@push $args:ident; $name:ident = $value:expr $(, $($rest:tt)*)?) => {
        $args.push_named(stringify!($name), $value);
        $crate::text_args!(@push $args; $($($rest)*)?);
    };
    (@push $args:ident; $value:expr $(, $($rest:tt)*)?) => {
        $args.push($value);
        $crate::text_args!(@push $args; $($($rest)*)?);
    };
    ($($tokens:tt)*) => {{
        #[allow(unused_mut)]
        let mut args = $crate::text::Arguments::new();
        $crate::text_args!(@push args; $($tokens)*);
        args
    }};
}
