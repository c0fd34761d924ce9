//! Page-level `<head>` metadata declared by a render.

/// Head content returned alongside the markup of a render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags as (name, content).
    pub meta: Vec<(String, String)>,
    /// Link tags as (rel, href).
    pub links: Vec<(String, String)>,
    /// External script sources.
    pub scripts: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.links.push(("stylesheet".to_string(), href.to_string()));
        self
    }

    /// Add an external script.
    pub fn with_script(mut self, src: &str) -> Self {
        self.scripts.push(src.to_string());
        self
    }

    pub fn title_tag(&self) -> String {
        match &self.title {
            Some(title) => format!("<title>{}</title>", escape_html(title)),
            None => String::new(),
        }
    }

    pub fn meta_tags(&self) -> String {
        self.meta
            .iter()
            .map(|(name, content)| {
                format!(
                    r#"<meta name="{}" content="{}">"#,
                    escape_html(name),
                    escape_html(content)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn link_tags(&self) -> String {
        self.links
            .iter()
            .map(|(rel, href)| {
                format!(
                    r#"<link rel="{}" href="{}">"#,
                    escape_html(rel),
                    escape_html(href)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn script_tags(&self) -> String {
        self.scripts
            .iter()
            .map(|src| format!(r#"<script src="{}"></script>"#, escape_html(src)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render all head content to HTML.
    pub fn render(&self) -> String {
        [
            self.title_tag(),
            self.meta_tags(),
            self.link_tags(),
            self.script_tags(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
