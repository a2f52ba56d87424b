use std::borrow::Cow;

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// Whether `value` may appear in DOT output without surrounding quotes.
///
/// Accepts the two unquoted DOT ID forms: a name (letters, digits and `_`,
/// not starting with a digit) or a numeral. Letters are ASCII plus the
/// U+0080..=U+00FF block.
pub fn is_bare_identifier(value: &str) -> bool {
    alt((name, numeral)).parse(value).is_ok()
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || ('\u{80}'..='\u{ff}').contains(&c)
}

fn is_name_continue(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit()
}

fn name(input: &mut &str) -> winnow::Result<()> {
    (one_of(is_name_start), take_while(0.., is_name_continue))
        .void()
        .parse_next(input)
}

fn numeral(input: &mut &str) -> winnow::Result<()> {
    (
        opt('-'),
        alt((('.', digit1).void(), (digit1, opt(('.', digit0))).void())),
    )
        .void()
        .parse_next(input)
}

/// Escapes backslashes, double quotes and line breaks, in that order.
pub fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
}

/// Escapes `value` when `format_strings` is set, otherwise returns it as is.
pub fn format_string(value: &str, format_strings: bool) -> Cow<'_, str> {
    if format_strings {
        Cow::Owned(escape(value))
    } else {
        Cow::Borrowed(value)
    }
}

/// Formats `value` and wraps it in double quotes unless the unescaped value is
/// already a bare identifier.
pub fn quote_if_needed(value: &str, format_strings: bool) -> Cow<'_, str> {
    let formatted = format_string(value, format_strings);
    if is_bare_identifier(value) {
        formatted
    } else {
        Cow::Owned(format!("\"{formatted}\""))
    }
}
