// ABOUTME: HTML encoding and anchor construction helpers.
// ABOUTME: Wraps html-escape for text encoding and builds <a> markup with optional attributes.

use std::borrow::Cow;
use std::fmt;

/// Target used when none (or an empty one) is given.
pub const DEFAULT_TARGET: &str = "_blank";

/// HTML-encodes a string, escaping `&`, `<`, `>` and `"`.
pub fn encode(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// How the `title` attribute of a link is produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LinkTitle {
    /// Reuse the link text.
    #[default]
    FromText,
    /// Use this value.
    Custom(String),
    /// Leave the attribute off.
    Omit,
}

/// Builder for `<a>` elements.
///
/// The link text and title are encoded unless [`Hyperlink::no_encode`] is set.
/// The href, target, class and extra attribute values are written verbatim;
/// callers are responsible for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    href: String,
    text: String,
    target: String,
    title: LinkTitle,
    class: Option<String>,
    encode: bool,
    attributes: Vec<(String, String)>,
}

impl Hyperlink {
    /// Create a link with the default target and a title taken from the text.
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
            target: DEFAULT_TARGET.to_string(),
            title: LinkTitle::FromText,
            class: None,
            encode: true,
            attributes: Vec::new(),
        }
    }

    /// Set the target. An empty target falls back to `_blank`.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        let target = target.into();
        self.target = if target.is_empty() {
            DEFAULT_TARGET.to_string()
        } else {
            target
        };
        self
    }

    /// Use a title different from the link text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = LinkTitle::Custom(title.into());
        self
    }

    /// Do not emit a title attribute.
    pub fn no_title(mut self) -> Self {
        self.title = LinkTitle::Omit;
        self
    }

    /// Add a CSS class attribute. Empty values are ignored.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class = (!class.is_empty()).then_some(class);
        self
    }

    /// Write text and title without encoding them.
    pub fn no_encode(mut self) -> Self {
        self.encode = false;
        self
    }

    /// Append an extra attribute. The value is not encoded.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Render the complete anchor element.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn encoded<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.encode {
            html_escape::encode_double_quoted_attribute(raw)
        } else {
            Cow::Borrowed(raw)
        }
    }
}

impl fmt::Display for Hyperlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<a href=\"{}\" target=\"{}\"", self.href, self.target)?;

        match &self.title {
            LinkTitle::FromText => write!(f, " title=\"{}\"", self.encoded(&self.text))?,
            LinkTitle::Custom(title) => write!(f, " title=\"{}\"", self.encoded(title))?,
            LinkTitle::Omit => {}
        }

        if let Some(class) = &self.class {
            write!(f, " class=\"{}\"", class)?;
        }

        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, value)?;
        }

        write!(f, ">{}</a>", self.encoded(&self.text))
    }
}

/// Builds a link with every option left at its default.
pub fn hyperlink(href: &str, text: &str) -> String {
    Hyperlink::new(href, text).render()
}
