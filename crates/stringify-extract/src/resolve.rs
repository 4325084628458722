//! Enum value resolution.
//!
//! Replays just enough of C enumeration semantics to tell a new value
//! (explicit literal or implicit increment) from an alias of another
//! enumerator. Aliases are skipped so the generated switch never carries two
//! case labels for the same constant. Aliases are never followed to the
//! enumerator they name.

use crate::classify::EnumEntry;

/// Decision for one enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The enumerator owns a distinct value.
    Accept(i64),
    /// The enumerator is assigned another identifier and is left out.
    SkipAlias,
}

/// Running "last value" of one enumeration scan.
#[derive(Debug, Clone, Default)]
pub struct EnumCursor {
    last: i64,
}

impl EnumCursor {
    /// A cursor positioned at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value.
    pub fn value(&self) -> i64 {
        self.last
    }

    /// Decide whether `entry` is accepted, updating the cursor.
    ///
    /// - integer literal: the cursor jumps to it
    /// - any other non-empty value: alias, cursor untouched
    /// - no value: the cursor advances by one
    pub fn resolve(&mut self, entry: &EnumEntry<'_>) -> Resolution {
        if let Some(value) = parse_int_literal(entry.value) {
            self.last = value;
            Resolution::Accept(value)
        } else if !entry.value.is_empty() {
            Resolution::SkipAlias
        } else {
            self.last = self.last.wrapping_add(1);
            Resolution::Accept(self.last)
        }
    }
}

/// Parse a C integer literal: decimal or `0x` hex, optional sign and
/// `u`/`l` suffixes.
///
/// Values above `i64::MAX` wrap; only the accept/skip decision depends on
/// the result.
pub fn parse_int_literal(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, unsigned) = match text.as_bytes().first().copied()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = unsigned.trim_end_matches(['u', 'U', 'l', 'L']);
    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        u64::from_str_radix(hex, 16).ok()?
    } else if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse::<u64>().ok()?
    } else {
        return None;
    };
    let value = magnitude as i64;
    Some(if negative { value.wrapping_neg() } else { value })
}
