use std::fmt::{self, Display, Formatter, Write};

use super::{Element, Slot};
use crate::text::Text;

macro_rules! render_integers {
    ($out:ident, $any:ident, $($int:ty),+) => {
        $(
            if let Some(value) = $any.downcast_ref::<$int>() {
                return $out.write_str(itoa::Buffer::new().format(*value));
            }
        )+
    };
}

macro_rules! render_floats {
    ($out:ident, $any:ident, $($float:ty),+) => {
        $(
            if let Some(value) = $any.downcast_ref::<$float>() {
                return write!($out, "{:.6}", value);
            }
        )+
    };
}

macro_rules! render_text {
    ($out:ident, $any:ident, $($text:ty),+) => {
        $(
            if let Some(value) = $any.downcast_ref::<$text>() {
                return write!($out, "{}", value);
            }
        )+
    };
}

/// Writes the textual form of a list element: integers in decimal, floats with six fractional
/// digits and text verbatim. Everything else is written as `(<type name> at <address>)`.
pub(crate) fn render<W: Write + ?Sized>(
    out: &mut W,
    element: &dyn Element,
    type_name: &str,
) -> fmt::Result {
    let any = element.as_any();

    render_integers!(out, any, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
    render_floats!(out, any, f32, f64);
    render_text!(out, any, String, &'static str, Text);

    write!(out, "({} at {:p})", type_name, element)
}

/// Displays a run of slots with `separator` between each. Empty slots are written as nothing.
pub(crate) struct Joined<'a> {
    pub slots: &'a [Slot],
    pub separator: &'a str,
}

impl Display for Joined<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(self.separator)?;
            }
            if let Some(value) = slot.value() {
                render(f, value, slot.type_name())?;
            }
        }
        Ok(())
    }
}
