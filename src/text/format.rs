use std::iter::Peekable;
use std::str::CharIndices;

use super::{Argument, Arguments, FormatError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    const fn from_char(c: char) -> Option<Align> {
        match c {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            _ => None,
        }
    }
}

/// A parsed `[[fill]align][+][#][0][width][.precision][type]` spec.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Spec {
    fill: char,
    align: Option<Align>,
    plus: bool,
    alternate: bool,
    zero: bool,
    width: usize,
    precision: Option<usize>,
    presentation: Option<char>,
}

impl Default for Spec {
    fn default() -> Self {
        Spec {
            fill: ' ',
            align: None,
            plus: false,
            alternate: false,
            zero: false,
            width: 0,
            precision: None,
            presentation: None,
        }
    }
}

const PRESENTATIONS: &str = "dxXobfeEsc?";

/// The largest width or precision a spec may request.
const MAX_COUNT: usize = u16::MAX as usize;

impl Spec {
    fn parse(spec: &str) -> Result<Spec, FormatError> {
        let invalid = || FormatError::InvalidSpec { spec: spec.to_owned() };
        let chars: Vec<char> = spec.chars().collect();
        let mut parsed = Spec::default();
        let mut i = 0;

        if let Some(align) = chars.get(1).copied().and_then(Align::from_char) {
            parsed.fill = chars[0];
            parsed.align = Some(align);
            i = 2;
        } else if let Some(align) = chars.first().copied().and_then(Align::from_char) {
            parsed.align = Some(align);
            i = 1;
        }

        if chars.get(i) == Some(&'+') {
            parsed.plus = true;
            i += 1;
        }
        if chars.get(i) == Some(&'#') {
            parsed.alternate = true;
            i += 1;
        }
        if chars.get(i) == Some(&'0') {
            parsed.zero = true;
            i += 1;
        }

        let (width, next) = parse_number(&chars, i).ok_or_else(invalid)?;
        parsed.width = width.unwrap_or(0);
        i = next;

        if chars.get(i) == Some(&'.') {
            let (precision, next) = parse_number(&chars, i + 1).ok_or_else(invalid)?;
            parsed.precision = Some(precision.ok_or_else(invalid)?);
            i = next;
        }

        if let Some(&c) = chars.get(i) {
            if !PRESENTATIONS.contains(c) {
                return Err(invalid());
            }
            parsed.presentation = Some(c);
            i += 1;
        }

        if i == chars.len() {
            Ok(parsed)
        } else {
            Err(invalid())
        }
    }
}

/// Reads a run of ASCII digits starting at `start`, returning the value (if any digits were
/// present) and the index after the run. Returns [`None`] if the value exceeds [`MAX_COUNT`].
fn parse_number(chars: &[char], start: usize) -> Option<(Option<usize>, usize)> {
    let mut end = start;
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.get(end).and_then(|c| c.to_digit(10)) {
        let next = value.unwrap_or(0)
            .checked_mul(10)?
            .checked_add(digit as usize)
            .filter(|&count| count <= MAX_COUNT)?;
        value = Some(next);
        end += 1;
    }
    Some((value, end))
}

enum Reference<'t> {
    Next,
    Index(usize),
    Name(&'t str),
}

impl<'t> Reference<'t> {
    fn parse(field: &'t str) -> Result<Reference<'t>, FormatError> {
        if field.is_empty() {
            Ok(Reference::Next)
        } else if field.bytes().all(|b| b.is_ascii_digit()) {
            field.parse()
                .map(Reference::Index)
                .map_err(|_| FormatError::InvalidField { field: field.to_owned() })
        } else if is_identifier(field) {
            Ok(Reference::Name(field))
        } else {
            Err(FormatError::InvalidField { field: field.to_owned() })
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Indexing {
    Unknown,
    Automatic(usize),
    Manual,
}

/// Substitutes `args` into the `{}` fields of `template`.
pub(crate) fn format(template: &str, args: &Arguments<'_>) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    let mut indexing = Indexing::Unknown;

    while let Some((position, c)) = chars.next() {
        match c {
            '{' if chars.next_if(|&(_, next)| next == '{').is_some() => out.push('{'),
            '}' if chars.next_if(|&(_, next)| next == '}').is_some() => out.push('}'),
            '{' => {
                let field = read_field(template, position, &mut chars)?;
                let (reference, spec) = match field.split_once(':') {
                    Some((reference, spec)) => (reference, Spec::parse(spec)?),
                    None => (field, Spec::default()),
                };
                let argument = resolve(Reference::parse(reference)?, args, &mut indexing)?;
                write_argument(&mut out, argument, &spec)?;
            },
            '}' => Err(FormatError::UnmatchedBrace { brace: '}', position })?,
            c => out.push(c),
        }
    }

    Ok(out)
}

/// Consumes characters up to the closing brace of a field opened at `open`, returning the text
/// between the braces.
fn read_field<'t>(
    template: &'t str,
    open: usize,
    chars: &mut Peekable<CharIndices<'t>>,
) -> Result<&'t str, FormatError> {
    for (position, c) in chars.by_ref() {
        match c {
            '}' => return Ok(&template[open + 1..position]),
            '{' => break,
            _ => (),
        }
    }
    Err(FormatError::UnmatchedBrace { brace: '{', position: open })
}

fn resolve<'a, 'b>(
    reference: Reference<'_>,
    args: &'b Arguments<'a>,
    indexing: &mut Indexing,
) -> Result<&'b Argument<'a>, FormatError> {
    let index = match reference {
        Reference::Name(name) => {
            return args.named(name).ok_or_else(|| FormatError::MissingNamed {
                name: name.to_owned(),
            });
        },
        Reference::Next => match *indexing {
            Indexing::Manual => Err(FormatError::MixedIndexing)?,
            Indexing::Unknown => {
                *indexing = Indexing::Automatic(1);
                0
            },
            Indexing::Automatic(next) => {
                *indexing = Indexing::Automatic(next + 1);
                next
            },
        },
        Reference::Index(index) => match *indexing {
            Indexing::Automatic(_) => Err(FormatError::MixedIndexing)?,
            _ => {
                *indexing = Indexing::Manual;
                index
            },
        },
    };
    args.positional(index).ok_or(FormatError::MissingArgument { index })
}

fn write_argument(out: &mut String, argument: &Argument<'_>, spec: &Spec) -> Result<(), FormatError> {
    let incompatible = |presentation| FormatError::IncompatibleType {
        presentation,
        argument: argument.kind(),
    };

    // Numbers carry their sign and radix prefix separately so that zero padding goes between the
    // prefix and the digits.
    let (numeric, body) = match *argument {
        Argument::Int(value) => integer(value < 0, value.unsigned_abs(), argument, spec)?,
        Argument::UInt(value) => integer(false, value, argument, spec)?,
        Argument::Float(value) => {
            let magnitude = value.abs();
            let digits = match (spec.presentation, spec.precision) {
                (None | Some('?'), None) => format!("{}", magnitude),
                (None | Some('?') | Some('f'), Some(precision)) => {
                    format!("{:.*}", precision, magnitude)
                },
                (Some('f'), None) => format!("{:.6}", magnitude),
                (Some('e'), None) => format!("{:e}", magnitude),
                (Some('e'), Some(precision)) => format!("{:.*e}", precision, magnitude),
                (Some('E'), None) => format!("{:E}", magnitude),
                (Some('E'), Some(precision)) => format!("{:.*E}", precision, magnitude),
                (Some(other), _) => Err(incompatible(other))?,
            };
            (Some((value.is_sign_negative() && !value.is_nan(), "")), digits)
        },
        Argument::Bool(value) => {
            if spec.precision.is_some() {
                Err(FormatError::PrecisionNotAllowed { argument: argument.kind() })?
            }
            match spec.presentation {
                None | Some('s') | Some('?') => (None, value.to_string()),
                Some(other) => Err(incompatible(other))?,
            }
        },
        Argument::Char(value) => {
            if spec.precision.is_some() {
                Err(FormatError::PrecisionNotAllowed { argument: argument.kind() })?
            }
            match spec.presentation {
                None | Some('c') => (None, value.to_string()),
                Some('?') => (None, format!("{:?}", value)),
                Some(other) => Err(incompatible(other))?,
            }
        },
        Argument::Str(ref value) => {
            let value = match spec.precision {
                Some(precision) => value.chars().take(precision).collect(),
                None => value.to_string(),
            };
            match spec.presentation {
                None | Some('s') => (None, value),
                Some('?') => (None, format!("{:?}", value)),
                Some(other) => Err(incompatible(other))?,
            }
        },
    };

    match numeric {
        Some((negative, prefix)) => {
            let sign = if negative { "-" } else if spec.plus { "+" } else { "" };
            if spec.zero {
                let len = sign.len() + prefix.len() + body.chars().count();
                out.push_str(sign);
                out.push_str(prefix);
                out.extend(std::iter::repeat_n('0', spec.width.saturating_sub(len)));
                out.push_str(&body);
            } else {
                let full = format!("{}{}{}", sign, prefix, body);
                pad(out, &full, spec, Align::Right);
            }
        },
        None => pad(out, &body, spec, Align::Left),
    }
    Ok(())
}

fn integer(
    negative: bool,
    magnitude: u128,
    argument: &Argument<'_>,
    spec: &Spec,
) -> Result<(Option<(bool, &'static str)>, String), FormatError> {
    if spec.precision.is_some() {
        Err(FormatError::PrecisionNotAllowed { argument: argument.kind() })?
    }
    let (prefix, digits) = match spec.presentation {
        None | Some('d') | Some('?') => ("", magnitude.to_string()),
        Some('x') => ("0x", format!("{:x}", magnitude)),
        Some('X') => ("0X", format!("{:X}", magnitude)),
        Some('o') => ("0o", format!("{:o}", magnitude)),
        Some('b') => ("0b", format!("{:b}", magnitude)),
        Some(other) => Err(FormatError::IncompatibleType {
            presentation: other,
            argument: argument.kind(),
        })?,
    };
    let prefix = if spec.alternate { prefix } else { "" };
    Ok((Some((negative, prefix)), digits))
}

fn pad(out: &mut String, value: &str, spec: &Spec, default: Align) {
    let fill = spec.width.saturating_sub(value.chars().count());
    let (before, after) = match spec.align.unwrap_or(default) {
        Align::Left => (0, fill),
        Align::Right => (fill, 0),
        Align::Center => (fill / 2, fill - fill / 2),
    };
    out.extend(std::iter::repeat_n(spec.fill, before));
    out.push_str(value);
    out.extend(std::iter::repeat_n(spec.fill, after));
}
