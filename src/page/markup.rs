use serde::{Deserialize, Serialize};

/// A node in a static markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    /// Container element such as `main` or `div`.
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        children: Vec<Node>,
    },
    /// Literal text content.
    Text { content: String },
    /// Navigation element pointing at an application route.
    Link { href: String, label: String },
}

impl Node {
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element {
            tag: tag.into(),
            class: None,
            children,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Node::Link {
            href: href.into(),
            label: label.into(),
        }
    }

    /// Set the class attribute. No-op on anything but an element.
    pub fn with_class(mut self, value: impl Into<String>) -> Self {
        if let Node::Element { class, .. } = &mut self {
            *class = Some(value.into());
        }
        self
    }

    /// All links in document order.
    pub fn links(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        self.collect_links(&mut out);
        out
    }

    fn collect_links<'a>(&'a self, out: &mut Vec<(&'a str, &'a str)>) {
        match self {
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_links(out);
                }
            }
            Node::Link { href, label } => out.push((href.as_str(), label.as_str())),
            Node::Text { .. } => {}
        }
    }

    /// Concatenated text content, link labels included.
    pub fn text_content(&self) -> String {
        match self {
            Node::Element { children, .. } => {
                children.iter().map(Node::text_content).collect::<String>()
            }
            Node::Text { content } => content.clone(),
            Node::Link { label, .. } => label.clone(),
        }
    }

    /// Render the tree as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element {
                tag,
                class,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                if let Some(class) = class {
                    out.push_str(" class=\"");
                    escape_into(class, out);
                    out.push('"');
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            Node::Text { content } => escape_into(content, out),
            Node::Link { href, label } => {
                out.push_str("<a href=\"");
                escape_into(href, out);
                out.push_str("\">");
                escape_into(label, out);
                out.push_str("</a>");
            }
        }
    }
}

pub(super) fn escape_into(raw: &str, out: &mut String) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
