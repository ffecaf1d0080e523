//! Literal encoding of text for embedding in diagnostic messages.
//!
//! A literal is the input wrapped in double quotes with every character that
//! could make the message ambiguous replaced by an escape:
//!
//! | Input                           | Output              |
//! |---------------------------------|---------------------|
//! | NUL, BEL, BS, FF, LF, CR, TAB   | `\0 \a \b \f \n \r \t` |
//! | `"`, `\`, `?`                   | `\" \\ \?`          |
//! | printable ASCII (`' '..='~'`)   | unchanged           |
//! | anything else                   | `\x` + 4 lowercase hex digits per UTF-16 code unit |
//!
//! Single quotes are printable and are never escaped. Characters outside the
//! basic multilingual plane are written as two escapes, one per surrogate.

use core::fmt::{self, Write};

const HEX_DIGIT: &[u8; 16] = b"0123456789abcdef";

/// Mnemonic letter for characters written as a two-character escape.
#[inline]
const fn escape_mnemonic(c: char) -> Option<char> {
    match c {
        '\0' => Some('0'),
        '\x07' => Some('a'),
        '\x08' => Some('b'),
        '\x0c' => Some('f'),
        '\n' => Some('n'),
        '\r' => Some('r'),
        '\t' => Some('t'),
        '"' => Some('"'),
        '\\' => Some('\\'),
        '?' => Some('?'),
        _ => None,
    }
}

#[inline]
fn write_code_unit<W: Write + ?Sized>(out: &mut W, unit: u16) -> fmt::Result {
    out.write_str("\\x")?;
    for shift in [12u16, 8, 4, 0] {
        out.write_char(HEX_DIGIT[usize::from(unit >> shift & 0xf)] as char)?;
    }
    Ok(())
}

/// Writes `s` as a quoted literal into `out`.
///
/// This is the streaming form of [`literal_encode`]; it only fails if `out`
/// does.
pub fn write_literal<W: Write + ?Sized>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        if let Some(mnemonic) = escape_mnemonic(c) {
            out.write_char('\\')?;
            out.write_char(mnemonic)?;
        } else if (' '..='~').contains(&c) {
            out.write_char(c)?;
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write_code_unit(out, *unit)?;
            }
        }
    }
    out.write_char('"')
}

/// Encodes `s` as an unambiguous quoted literal.
///
/// `None` encodes as the bare word `null`, so an absent string can never be
/// confused with an empty one (`""`).
///
/// # Example
///
/// ```
/// use xception_core::literal_encode;
///
/// assert_eq!(literal_encode(Some("a\tb")), r#""a\tb""#);
/// assert_eq!(literal_encode(Some("æ")), r#""\x00e6""#);
/// assert_eq!(literal_encode(None), "null");
/// ```
pub fn literal_encode(s: Option<&str>) -> String {
    let Some(s) = s else {
        return String::from("null");
    };

    let mut out = String::with_capacity(s.len() + 2);
    // Writing into a String cannot fail.
    let _ = write_literal(&mut out, s);
    out
}
