//! Render results.

use std::borrow::Cow;

use serde::Serialize;

use super::error::TemplateError;
use super::head::HeadContent;
use super::template::TemplateSlots;

/// Output of a synchronous render: markup plus the head metadata the UI
/// tree declared while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub markup: String,
    pub head: HeadContent,
}

impl View {
    pub fn new(markup: impl Into<String>, head: HeadContent) -> Self {
        Self {
            markup: markup.into(),
            head,
        }
    }
}

/// Everything the view template needs for one request. Write-once.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    view: View,
    state_json: String,
}

impl RenderedDocument {
    /// Pair a view with the snapshot it was rendered from.
    pub fn new<S: Serialize>(view: View, state: &S) -> Result<Self, TemplateError> {
        Ok(Self {
            view,
            state_json: script_safe_json(state)?,
        })
    }

    pub fn markup(&self) -> &str {
        &self.view.markup
    }

    pub fn head(&self) -> &HeadContent {
        &self.view.head
    }

    /// The snapshot as JSON that is safe to inline inside `<script>`.
    pub fn state_json(&self) -> &str {
        &self.state_json
    }
}

impl TemplateSlots for RenderedDocument {
    fn slot(&self, key: &str) -> Option<Cow<'_, str>> {
        let head = self.head();
        let value = match key {
            "html" => Cow::Borrowed(self.markup()),
            "state" => Cow::Borrowed(self.state_json()),
            "head" => Cow::Owned(head.render()),
            "head.title" => Cow::Owned(head.title_tag()),
            "head.meta" => Cow::Owned(head.meta_tags()),
            "head.link" => Cow::Owned(head.link_tags()),
            "head.script" => Cow::Owned(head.script_tags()),
            _ => return None,
        };
        Some(value)
    }
}

// `<`, `>` and `&` only occur inside JSON strings, where the \u escapes are
// equivalent, so the output stays valid JSON and cannot close the script.
fn script_safe_json<S: Serialize>(state: &S) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(state)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}
