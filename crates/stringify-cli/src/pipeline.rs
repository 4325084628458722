//! Generator pipeline with explicit stages.
//!
//! 1. **Template**: load the output template and check its slots
//! 2. **Extract**: read the three headers and collect symbols per category
//! 3. **Render**: fill the five case blocks and the file name
//! 4. **Write**: replace the output only when its content changed
//!
//! Any failure before the write stage leaves an existing output untouched.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use stringify_extract::{HeaderSources, extract_all};
use stringify_model::{Category, SymbolRegistry};
use stringify_render::{
    Template, WriteOutcome, is_up_to_date, render_document, required_slots, write_if_changed,
};

use crate::config::GeneratorConfig;

/// What to do with the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Write the output when it differs.
    Write,
    /// Only compare against the existing output.
    Check,
}

/// Final state of the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Written,
    Unchanged,
    /// Check mode found a missing or different output.
    OutOfDate,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Written => "written",
            Outcome::Unchanged => "unchanged",
            Outcome::OutOfDate => "out of date",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<WriteOutcome> for Outcome {
    fn from(outcome: WriteOutcome) -> Self {
        match outcome {
            WriteOutcome::Written => Outcome::Written,
            WriteOutcome::Unchanged => Outcome::Unchanged,
        }
    }
}

#[derive(Debug)]
pub struct GenerateResult {
    pub output_path: PathBuf,
    pub counts: Vec<(Category, usize)>,
    pub outcome: Outcome,
}

impl GenerateResult {
    /// True when `--check` should fail.
    pub fn is_out_of_date(&self) -> bool {
        self.outcome == Outcome::OutOfDate
    }
}

/// Run every stage for `config`.
pub fn run(config: &GeneratorConfig, mode: RunMode) -> Result<GenerateResult> {
    let template = load_template(config)?;

    let registry = info_span!("extract", dir = %config.header_dir.display())
        .in_scope(|| -> Result<SymbolRegistry> {
            let sources = HeaderSources::load(&config.header_dir, &config.headers)
                .context("read SDK headers")?;
            extract_all(&sources, &config.naming).context("extract symbols")
        })?;
    for (category, count) in registry.counts() {
        info!(%category, count, "symbols");
    }

    let document = info_span!("render").in_scope(|| {
        render_document(&template, &registry, &config.output_file_name())
            .context("render lookup source")
    })?;

    let outcome = info_span!("write", path = %config.output_path.display()).in_scope(
        || -> Result<Outcome> {
            match mode {
                RunMode::Write => Ok(write_if_changed(&config.output_path, &document)
                    .context("write lookup source")?
                    .into()),
                RunMode::Check => {
                    if is_up_to_date(&config.output_path, &document)
                        .context("compare lookup source")?
                    {
                        Ok(Outcome::Unchanged)
                    } else {
                        info!("output is out of date");
                        Ok(Outcome::OutOfDate)
                    }
                }
            }
        },
    )?;

    Ok(GenerateResult {
        output_path: config.output_path.clone(),
        counts: registry.counts(),
        outcome,
    })
}

fn load_template(config: &GeneratorConfig) -> Result<Template> {
    let template = match &config.template {
        Some(path) => Template::from_file(path)
            .with_context(|| format!("load template {}", path.display()))?,
        None => Template::builtin(),
    };
    template
        .require_slots(required_slots())
        .context("validate template")?;
    Ok(template)
}
