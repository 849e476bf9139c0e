#![cfg(test)]

use super::*;
use crate::text_args;

fn format(template: &str, args: &Arguments<'_>) -> Result<Text, FormatError> {
    Text::from(template).format(args)
}

#[test]
fn test_case_conversion() {
    let text = Text::from("Hello, World!");
    assert_eq!(text.upper(), "HELLO, WORLD!");
    assert_eq!(text.lower(), "hello, world!");
    assert_eq!(text, "Hello, World!", "Case conversion should return a new Text.");
    assert_eq!(Text::from("straße").upper(), "STRASSE");
}

#[test]
fn test_affixes_and_find() {
    let text = Text::from("pylike.json");
    assert!(text.startswith("py"));
    assert!(text.endswith(".json"));
    assert!(text.startswith(""), "Every Text starts with the empty string.");
    assert!(!text.endswith("pylike.json.bak"), "A suffix longer than the Text can't match.");

    assert_eq!(text.find("like"), Some(2));
    assert_eq!(text.find("yaml"), None);
    assert_eq!(text.find(""), Some(0));
    assert_eq!(Text::new().len(), 0);
    assert_eq!(Text::from("你好").len(), 6, "Lengths should be measured in bytes.");
}

#[test]
fn test_concatenation() {
    let left = Text::from("Easy");
    let joined = &left + "Cpp" + Text::from(" ") + String::from("Version");
    assert_eq!(joined, "EasyCpp Version");
    assert_eq!(left, "Easy", "Adding to a borrowed Text should leave it untouched.");

    let mut text = Text::new();
    text += "a";
    text += &left;
    assert_eq!(text, "aEasy");
}

#[test]
fn test_format_positional() {
    assert_eq!(format("{}, {}!", &text_args!("Hello", "world")), Ok(Text::from("Hello, world!")));
    assert_eq!(format("{1}{0}{1}", &text_args!('a', 'b')), Ok(Text::from("bab")));
    assert_eq!(format("no fields", &text_args!(1, 2)), Ok(Text::from("no fields")));
    assert_eq!(
        format("{} {} {} {}", &text_args!(-3, 2.5_f64, true, u128::MAX)),
        Ok(Text::from("-3 2.5 true 340282366920938463463374607431768211455"))
    );
}

#[test]
fn test_format_named() {
    let args = text_args!(1, name = "pylike", version = Text::from("0.1"));
    assert_eq!(
        format("{name} v{version} #{}", &args),
        Ok(Text::from("pylike v0.1 #1")),
        "Named fields shouldn't affect automatic indexing."
    );
    assert_eq!(
        format("{missing}", &args),
        Err(FormatError::MissingNamed { name: String::from("missing") })
    );

    let args = Arguments::new().with_named("x", 1).with_named("x", 2);
    assert_eq!(format("{x}", &args), Ok(Text::from("2")), "Later names should replace earlier.");
}

#[test]
fn test_format_escapes() {
    assert_eq!(format("{{}} {{{}}}", &text_args!(7)), Ok(Text::from("{} {7}")));
    assert_eq!(
        format("open { brace", &text_args!()),
        Err(FormatError::UnmatchedBrace { brace: '{', position: 5 })
    );
    assert_eq!(
        format("close } brace", &text_args!()),
        Err(FormatError::UnmatchedBrace { brace: '}', position: 6 })
    );
    assert_eq!(
        format("{{0}", &text_args!()),
        Err(FormatError::UnmatchedBrace { brace: '}', position: 3 })
    );
}

#[test]
fn test_format_errors() {
    assert_eq!(format("{} {}", &text_args!(1)), Err(FormatError::MissingArgument { index: 1 }));
    assert_eq!(format("{0} {}", &text_args!(1)), Err(FormatError::MixedIndexing));
    assert_eq!(format("{} {0}", &text_args!(1)), Err(FormatError::MixedIndexing));
    assert!(format("{1.5}", &text_args!(1)).is_err_and(|e| e.is_invalid_field()));
    assert!(format("{:q}", &text_args!(1)).is_err_and(|e| e.is_invalid_spec()));
    assert!(format("{:.}", &text_args!(1.0)).is_err_and(|e| e.is_invalid_spec()));
    assert_eq!(
        format("{:99999999999999999999}", &text_args!(1)),
        Err(FormatError::InvalidSpec { spec: String::from("99999999999999999999") }),
        "A width that doesn't fit in usize should be rejected, not saturated."
    );
    assert!(
        format("{:1000000000000}", &text_args!(1)).is_err_and(|e| e.is_invalid_spec()),
        "Huge widths should be rejected before anything is allocated."
    );
    assert!(format("{:.65536}", &text_args!(1.0)).is_err_and(|e| e.is_invalid_spec()));
    assert_eq!(
        format("{:65535}", &text_args!("")).map(|text| text.len()),
        Ok(65535),
        "The largest allowed width should still be honoured."
    );
    assert_eq!(
        format("{:x}", &text_args!("text")),
        Err(FormatError::IncompatibleType { presentation: 'x', argument: "string" })
    );
    assert_eq!(
        format("{:f}", &text_args!(3)),
        Err(FormatError::IncompatibleType { presentation: 'f', argument: "integer" })
    );
    assert_eq!(
        format("{:.2}", &text_args!(3)),
        Err(FormatError::PrecisionNotAllowed { argument: "integer" })
    );
}

#[test]
fn test_format_specs() {
    let cases: &[(&str, Arguments<'_>, &str)] = &[
        ("{:5}", text_args!(42), "   42"),
        ("{:<5}|", text_args!(42), "42   |"),
        ("{:*^7}", text_args!("mid"), "**mid**"),
        ("{:5}|", text_args!("ab"), "ab   |"),
        ("{:>5}", text_args!("ab"), "   ab"),
        ("{:05}", text_args!(-42), "-0042"),
        ("{:+}", text_args!(42), "+42"),
        ("{:#x}", text_args!(255), "0xff"),
        ("{:#010b}", text_args!(5), "0b00000101"),
        ("{:X}", text_args!(-255), "-FF"),
        ("{:o}", text_args!(8), "10"),
        ("{:.3}", text_args!(3.14159_f64), "3.142"),
        ("{:f}", text_args!(1.5_f64), "1.500000"),
        ("{:08.2f}", text_args!(-1.5_f64), "-0001.50"),
        ("{:e}", text_args!(1500.0_f64), "1.5e3"),
        ("{:.2}", text_args!("truncate"), "tr"),
        ("{:?}", text_args!("quoted"), "\"quoted\""),
        ("{:c}", text_args!('z'), "z"),
        ("{:>6}", text_args!(false), " false"),
    ];

    for (template, args, expected) in cases {
        assert_eq!(
            format(template, args).as_deref().map_err(ToString::to_string),
            Ok(*expected),
            "Template {template:?} should render as {expected:?}."
        );
    }
}
