//! Templates with named `{{ slot }}` placeholders.
//!
//! Substitution is a pure function of the parsed template and a slot map.
//! Text outside placeholders is copied verbatim.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RenderError, Result};

static SLOT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-z_][a-z0-9_]*)\s*\}\}").expect("Invalid template slot regex")
});

const BUILTIN_TEMPLATE: &str = include_str!("../templates/PrlStringifyConsts.cpp.tmpl");

/// Values substituted into a template, keyed by slot name.
pub type SlotValues = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(String),
}

/// A parsed template.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
    slots: BTreeSet<String>,
}

impl Template {
    /// Split `text` into literal runs and slot references.
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut slots = BTreeSet::new();
        let mut last = 0;
        for caps in SLOT_REGEX.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Literal(text[last..whole.start()].to_string()));
            }
            segments.push(Segment::Slot(name.as_str().to_string()));
            slots.insert(name.as_str().to_string());
            last = whole.end();
        }
        if last < text.len() {
            segments.push(Segment::Literal(text[last..].to_string()));
        }
        Self { segments, slots }
    }

    /// The C source template compiled into the generator.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_TEMPLATE)
    }

    /// Load and parse a template file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| RenderError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Slot names referenced by the template, sorted.
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    /// Fail with [`RenderError::MissingSlot`] for the first name the
    /// template does not reference.
    pub fn require_slots<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<()> {
        match names.into_iter().find(|name| !self.slots.contains(*name)) {
            Some(slot) => Err(RenderError::MissingSlot {
                slot: slot.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Substitute every slot. A slot without a value is an error.
    pub fn render(&self, values: &SlotValues) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(name) => {
                    let value = values
                        .get(name)
                        .ok_or_else(|| RenderError::UnknownSlot { slot: name.clone() })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}
