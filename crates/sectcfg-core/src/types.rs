use core::ops::{BitOr, BitOrAssign};

use crate::value::ValueError;

/// Set of integer bases a field accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntMode(u8);

impl IntMode {
    pub const DEC: IntMode = IntMode(1);
    pub const HEX: IntMode = IntMode(1 << 1);
    pub const OCT: IntMode = IntMode(1 << 2);

    /// Bases accepted by fixed-width integer types unless a tag overrides them.
    pub const FIXED_WIDTH_DEFAULT: IntMode = IntMode(Self::DEC.0 | Self::HEX.0);
    /// Bases accepted by every other integer-like type.
    pub const OTHER_DEFAULT: IntMode = IntMode(Self::DEC.0 | Self::HEX.0 | Self::OCT.0);

    /// Reads `d`, `h` and `o` (any case, any order) into a mode.
    pub fn from_letters(letters: &str) -> Self {
        let mut mode = IntMode::default();
        for c in letters.chars() {
            match c.to_ascii_lowercase() {
                'd' => mode |= IntMode::DEC,
                'h' => mode |= IntMode::HEX,
                'o' => mode |= IntMode::OCT,
                _ => {}
            }
        }
        mode
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: IntMode) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for IntMode {
    type Output = IntMode;

    fn bitor(self, rhs: IntMode) -> IntMode {
        IntMode(self.0 | rhs.0)
    }
}

impl BitOrAssign for IntMode {
    fn bitor_assign(&mut self, rhs: IntMode) {
        self.0 |= rhs.0;
    }
}

impl core::fmt::Display for IntMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let names = [
            (IntMode::DEC, "decimal"),
            (IntMode::HEX, "hexadecimal"),
            (IntMode::OCT, "octal"),
        ];
        let mut first = true;
        for (mode, name) in names {
            if self.contains(mode) {
                if !first {
                    f.write_str("/")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

/// An integer literal split into sign, digits and radix, ready to be parsed
/// into a concrete integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntLiteral<'a> {
    pub negative: bool,
    pub digits: &'a str,
    pub radix: u32,
    /// The trimmed input, kept for error messages.
    pub source: &'a str,
}

impl IntLiteral<'_> {
    /// Digits with the sign re-attached, in the form `from_str_radix` expects.
    pub fn signed_digits(&self) -> String {
        if self.negative {
            format!("-{}", self.digits)
        } else {
            self.digits.to_string()
        }
    }
}

/// Parses a boolean literal: `true`/`yes`/`on`/`1` or `false`/`no`/`off`/`0`,
/// case-insensitively.
pub fn parse_bool(text: &str) -> Result<bool, ValueError> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ValueError::InvalidBool(text.to_string())),
    }
}

/// Splits `text` into an [`IntLiteral`] accepted under `mode`.
///
/// `mode` must not be empty. Which prefixes are honored depends on the bases
/// in the mode; with only decimal and hexadecimal allowed, `"052"` is the
/// decimal number 52.
pub fn parse_int(text: &str, mode: IntMode) -> Result<IntLiteral<'_>, ValueError> {
    let source = text.trim();
    let (negative, body) = match source.as_bytes().first() {
        Some(b'-') => (true, &source[1..]),
        Some(b'+') => (false, &source[1..]),
        _ => (false, source),
    };
    let invalid = || ValueError::InvalidInt {
        text: source.to_string(),
        mode,
    };
    let hex_prefixed = has_hex_prefix(body);
    let zero_prefixed = body.starts_with('0');

    let dec = IntMode::DEC;
    let hex = IntMode::HEX;
    let oct = IntMode::OCT;
    let (radix, digits) = if mode == dec {
        (10, body)
    } else if mode == dec | hex {
        if hex_prefixed {
            (16, &body[2..])
        } else {
            (10, body)
        }
    } else if mode == dec | oct {
        if zero_prefixed && !hex_prefixed {
            detect_radix(body)
        } else {
            (10, body)
        }
    } else if mode == dec | hex | oct {
        detect_radix(body)
    } else if mode == hex {
        if hex_prefixed {
            (16, &body[2..])
        } else {
            (16, body)
        }
    } else if mode == oct {
        (8, body)
    } else if mode == hex | oct {
        if zero_prefixed {
            detect_radix(body)
        } else {
            return Err(ValueError::AmbiguousInt(source.to_string()));
        }
    } else {
        return Err(invalid());
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }
    Ok(IntLiteral {
        negative,
        digits,
        radix,
        source,
    })
}

fn has_hex_prefix(body: &str) -> bool {
    body.starts_with("0x") || body.starts_with("0X")
}

/// Radix detection for literals whose base is given by their prefix:
/// `0x`, `0o`, `0b`, or a bare leading zero for octal.
fn detect_radix(body: &str) -> (u32, &str) {
    let bytes = body.as_bytes();
    match bytes {
        [b'0', b'x' | b'X', ..] => (16, &body[2..]),
        [b'0', b'o' | b'O', ..] => (8, &body[2..]),
        [b'0', b'b' | b'B', ..] => (2, &body[2..]),
        [b'0', _, ..] => (8, &body[1..]),
        _ => (10, body),
    }
}
