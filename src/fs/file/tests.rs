#![cfg(test)]

use super::*;

#[test]
fn test_open_modes() {
    let modes = [
        (OpenMode::Read, "r", true, false),
        (OpenMode::Write, "w", false, true),
        (OpenMode::Append, "a", false, true),
        (OpenMode::ReadExtended, "r+", true, true),
        (OpenMode::WriteExtended, "w+", true, true),
        (OpenMode::AppendExtended, "a+", true, true),
    ];

    for (mode, string, readable, writable) in modes {
        assert_eq!(mode.as_str(), string);
        assert_eq!(mode.to_string(), string);
        assert_eq!(string.parse(), Ok(mode));
        assert_eq!(mode.is_readable(), readable, "Mode '{mode}' has the wrong read access.");
        assert_eq!(mode.is_writable(), writable, "Mode '{mode}' has the wrong write access.");
    }

    assert!("rw".parse::<OpenMode>().is_err());
}

#[test]
fn test_open_flags() {
    for mode in [OpenMode::Read, OpenMode::ReadExtended] {
        assert!(mode.requires_existing());
        assert_eq!(mode.flags() & libc::O_CREAT, 0, "Mode '{mode}' shouldn't create files.");
    }
    for mode in [OpenMode::Write, OpenMode::Append, OpenMode::WriteExtended, OpenMode::AppendExtended] {
        assert!(!mode.requires_existing());
        assert_ne!(mode.flags() & libc::O_CREAT, 0, "Mode '{mode}' should create files.");
    }

    assert_ne!(OpenMode::Append.flags() & libc::O_APPEND, 0);
    assert_eq!(OpenMode::Write.flags() & libc::O_ACCMODE, libc::O_WRONLY);
    assert_eq!(OpenMode::AppendExtended.flags() & libc::O_ACCMODE, libc::O_RDWR);
}
