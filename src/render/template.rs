//! View template: a document skeleton with `{{ key }}` placeholders.
//!
//! # Responsibilities
//! - Load the template once at startup (file or bundled default)
//! - Reject malformed tags at parse time
//! - Substitute slot values per request; unknown keys fail the render
//!
//! # Design Decisions
//! - Parsed into segments once, shared read-only behind `Arc`
//! - Values are inserted verbatim; escaping is the slot provider's job

use std::borrow::Cow;
use std::path::Path;

use super::error::TemplateError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Bundled template used when no template path is configured.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../views/ssr.html");

/// Source of placeholder values.
pub trait TemplateSlots {
    fn slot(&self, key: &str) -> Option<Cow<'_, str>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(String),
}

/// A parsed, immutable view template.
#[derive(Debug, Clone)]
pub struct ViewTemplate {
    segments: Vec<Segment>,
    size_hint: usize,
}

impl ViewTemplate {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }

            let after_open = &rest[start + OPEN.len()..];
            let end = after_open.find(CLOSE).ok_or(TemplateError::Unterminated {
                offset: offset + start,
            })?;

            let key = after_open[..end].trim();
            if key.is_empty() {
                return Err(TemplateError::EmptyTag {
                    offset: offset + start,
                });
            }
            segments.push(Segment::Slot(key.to_string()));

            let consumed = start + OPEN.len() + end + CLOSE.len();
            rest = &rest[consumed..];
            offset += consumed;
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self {
            segments,
            size_hint: source.len(),
        })
    }

    /// Load from `path`, or fall back to the bundled template.
    pub fn load(path: Option<&Path>) -> Result<Self, TemplateError> {
        match path {
            Some(path) => {
                let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                Self::parse(&source)
            }
            None => Self::parse(DEFAULT_TEMPLATE),
        }
    }

    /// Placeholder keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Slot(key) => Some(key.as_str()),
            Segment::Text(_) => None,
        })
    }

    pub fn render(&self, slots: &impl TemplateSlots) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.size_hint * 2);
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(key) => {
                    let value = slots
                        .slot(key)
                        .ok_or_else(|| TemplateError::UnknownKey(key.clone()))?;
                    out.push_str(&value);
                }
            }
        }
        Ok(out)
    }
}
