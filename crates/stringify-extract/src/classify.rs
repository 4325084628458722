//! Line classifiers.
//!
//! Each classifier makes a single forward pass over header text and yields
//! at most one candidate per line, borrowing names from the input:
//!
//! - [`error_symbols`]: `#define` result codes after the include guard
//! - [`event_symbols`]: indented event identifiers
//! - [`enum_entries`]: enumerators with their raw value text, for the
//!   [resolver](crate::resolve)

use std::iter::Enumerate;
use std::str::Lines;

use regex::Regex;
use stringify_model::NamingRules;

use crate::error::{ExtractError, Result};

const GUARD_DIRECTIVE: &str = "#ifndef";
const DEFINE_DIRECTIVE: &str = "#define";

/// Result-code names declared in an errors header.
///
/// Everything before the first `#ifndef` line is preamble and ignored. After
/// it, a `#define` whose name carries the public prefix and whose value
/// carries the result-type prefix is a candidate. A `#define` with fewer
/// than three tokens is malformed, unless it defines the include guard.
pub fn error_symbols<'a>(text: &'a str, rules: &'a NamingRules) -> ErrorSymbols<'a> {
    ErrorSymbols {
        lines: text.lines().enumerate(),
        rules,
        guard: None,
        in_body: false,
        failed: false,
    }
}

/// Iterator returned by [`error_symbols`].
///
/// Yields `Err` once for a malformed directive and ends there.
#[derive(Debug)]
pub struct ErrorSymbols<'a> {
    lines: Enumerate<Lines<'a>>,
    rules: &'a NamingRules,
    guard: Option<&'a str>,
    in_body: bool,
    failed: bool,
}

impl<'a> ErrorSymbols<'a> {
    fn classify(&mut self, index: usize, raw: &'a str) -> Option<Result<&'a str>> {
        let line = raw.trim_end();
        if !self.in_body {
            if !line.starts_with(GUARD_DIRECTIVE) {
                return None;
            }
            self.in_body = true;
            self.guard = line.split_whitespace().nth(1);
            return None;
        }

        let tokens: Vec<&'a str> = line.split_whitespace().collect();
        if tokens.first() != Some(&DEFINE_DIRECTIVE) {
            return None;
        }
        match tokens.as_slice() {
            [_, name, value, ..] => (name.starts_with(self.rules.public_error_prefix.as_str())
                && value.starts_with(self.rules.result_type_prefix.as_str()))
            .then_some(Ok(*name)),
            [_, name] if Some(*name) == self.guard => None,
            _ => Some(Err(ExtractError::malformed(index + 1, line))),
        }
    }
}

impl<'a> Iterator for ErrorSymbols<'a> {
    type Item = Result<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while let Some((index, raw)) = self.lines.next() {
            if let Some(candidate) = self.classify(index, raw) {
                self.failed = candidate.is_err();
                return Some(candidate);
            }
        }
        None
    }
}

/// Event names: lines starting with exactly one space and the event prefix.
///
/// The first whitespace-delimited token of a qualifying line is yielded
/// verbatim, so ` PET_X = 1,` yields `PET_X` and ` PET_X,` yields `PET_X,`.
pub fn event_symbols<'a>(
    text: &'a str,
    rules: &'a NamingRules,
) -> impl Iterator<Item = &'a str> + 'a {
    let prefix = rules.event_prefix.as_str();
    text.lines().filter_map(move |raw| {
        let line = raw.trim_end();
        let body = line.strip_prefix(' ')?;
        if !body.starts_with(prefix) {
            return None;
        }
        body.split_whitespace().next()
    })
}

/// An enumerator declaration found by [`enum_entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumEntry<'a> {
    pub name: &'a str,
    /// Assigned value text, ending at a comma, a closing brace or a comment;
    /// empty when the enumerator relies on the implicit increment.
    pub value: &'a str,
}

impl<'a> EnumEntry<'a> {
    pub fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }
}

/// Matcher for enumerator lines of one prefix family.
#[derive(Debug, Clone)]
pub struct EnumMatcher {
    pattern: Regex,
}

impl EnumMatcher {
    pub fn new(prefix: &str) -> Self {
        let pattern = format!(
            r"^\s*(?P<name>{}[A-Z_0-9]+)\b\s*(?:=\s*(?P<value>[^,{{}}]*))?",
            regex::escape(prefix)
        );
        Self {
            pattern: Regex::new(&pattern).expect("escaped enum prefix pattern"),
        }
    }

    /// Match a single line.
    pub fn entry<'a>(&self, line: &'a str) -> Option<EnumEntry<'a>> {
        let caps = self.pattern.captures(line)?;
        let name = caps.name("name")?.as_str();
        let value = caps
            .name("value")
            .map(|m| strip_comment(m.as_str()))
            .unwrap_or_default();
        Some(EnumEntry::new(name, value))
    }
}

/// Enumerators of one prefix family, in line order.
pub fn enum_entries<'a>(
    text: &'a str,
    prefix: &str,
) -> impl Iterator<Item = EnumEntry<'a>> + use<'a> {
    let matcher = EnumMatcher::new(prefix);
    text.lines().filter_map(move |line| matcher.entry(line))
}

fn strip_comment(value: &str) -> &str {
    let end = [value.find("//"), value.find("/*")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(value.len());
    value[..end].trim()
}
