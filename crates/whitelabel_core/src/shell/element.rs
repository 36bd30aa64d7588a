//! Render tree produced by the shell components.
//!
//! # Responsibility
//! - Describe the page as a small tree of typed nodes.
//! - Render the tree to deterministic HTML text via askama templates.
//!
//! # Invariants
//! - Every text and attribute value goes through askama HTML escaping.
//! - Output order equals child order; nothing is sorted.

use askama::Template;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// One node of the rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Page {
        lang: &'static str,
        children: Vec<Element>,
    },
    Header(Vec<Element>),
    Main(Vec<Element>),
    Footer(Vec<Element>),
    Row(Vec<Element>),
    Column(Vec<Element>),
    Text(String),
    Link {
        label: String,
        href: Option<String>,
    },
    Image {
        src: String,
        alt: String,
    },
}

impl Element {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Link without a target, rendered as a bare anchor.
    pub fn link(label: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: None,
        }
    }

    pub fn link_to(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn children(&self) -> &[Element] {
        match self {
            Self::Page { children, .. } => children,
            Self::Header(children)
            | Self::Main(children)
            | Self::Footer(children)
            | Self::Row(children)
            | Self::Column(children) => children,
            Self::Text(_) | Self::Link { .. } | Self::Image { .. } => &[],
        }
    }

    /// Labels of every link in document order.
    pub fn link_labels(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        self.collect_link_labels(&mut labels);
        labels
    }

    fn collect_link_labels<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Self::Link { label, .. } = self {
            out.push(label.as_str());
        }
        for child in self.children() {
            child.collect_link_labels(out);
        }
    }

    /// Renders this node and its children through the HTML templates.
    pub fn render_html(&self) -> askama::Result<String> {
        match self {
            Self::Page { lang, children } => PageTemplate {
                lang: *lang,
                children: render_children(children)?,
            }
            .render(),
            Self::Header(children) => container("header", None, children),
            Self::Main(children) => container("main", None, children),
            Self::Footer(children) => container("footer", None, children),
            Self::Row(children) => container("div", Some("row"), children),
            Self::Column(children) => container("div", Some("column"), children),
            Self::Text(value) => TextTemplate { value }.render(),
            Self::Link { label, href } => LinkTemplate {
                label,
                href: href.as_deref(),
            }
            .render(),
            Self::Image { src, alt } => ImageTemplate { src, alt }.render(),
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let html = self.render_html().map_err(|_| std::fmt::Error)?;
        f.write_str(&html)
    }
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    lang: &'a str,
    children: Vec<String>,
}

#[derive(Template)]
#[template(path = "container.html")]
struct ContainerTemplate<'a> {
    tag: &'a str,
    class: Option<&'a str>,
    children: Vec<String>,
}

#[derive(Template)]
#[template(path = "text.html")]
struct TextTemplate<'a> {
    value: &'a str,
}

#[derive(Template)]
#[template(path = "link.html")]
struct LinkTemplate<'a> {
    label: &'a str,
    href: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "image.html")]
struct ImageTemplate<'a> {
    src: &'a str,
    alt: &'a str,
}

fn container(tag: &str, class: Option<&str>, children: &[Element]) -> askama::Result<String> {
    ContainerTemplate {
        tag,
        class,
        children: render_children(children)?,
    }
    .render()
}

// Children are rendered (and escaped) first, then inserted verbatim.
fn render_children(children: &[Element]) -> askama::Result<Vec<String>> {
    children.iter().map(Element::render_html).collect()
}

/// Deferred render unit supplied by a brand.
#[derive(Clone)]
pub struct Renderable(Arc<dyn Fn() -> Element + Send + Sync>);

impl Renderable {
    pub fn new(render: impl Fn() -> Element + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    /// Renderable that always produces a bare link with `label`.
    pub fn link(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new(move || Element::link(label.clone()))
    }

    pub fn render(&self) -> Element {
        (self.0)()
    }
}

impl std::fmt::Debug for Renderable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Renderable(..)")
    }
}
