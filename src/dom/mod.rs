//! A small owned element tree standing in for the browser DOM.
//!
//! Pages are built from a fixed shell whose anchor elements carry stable
//! ids (see [`Slot`]). Controllers look anchors up by slot and populate
//! them; an anchor missing from a shell is skipped, never an error.

mod slot;

pub use slot::Slot;

use std::fmt::Write;

use tracing::debug;

const VOID_ELEMENTS: [&str; 6] = ["meta", "link", "img", "br", "hr", "input"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// `aria-hidden` icon, the most common leaf in page markup.
    pub fn icon(class: &str) -> Self {
        Element::new("i").class(class).attr("aria-hidden", "true")
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Replaces all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(e) => e.find_by_id(id),
            Node::Text(_) => None,
        })
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(e) => e.find_by_id_mut(id),
            Node::Text(_) => None,
        })
    }

    /// Every descendant (including self) carrying `class`, in document order.
    pub fn find_all_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            out.push(self);
        }
        for child in &self.children {
            if let Node::Element(e) = child {
                e.find_all_by_class(class, out);
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        let raw = self.tag == "script" || self.tag == "style";
        for child in &self.children {
            match child {
                Node::Text(t) if raw => out.push_str(&t.replace("</", "<\\/")),
                Node::Text(t) => out.push_str(&escape_text(t)),
                Node::Element(e) => e.render_into(out),
            }
        }

        let _ = write!(out, "</{}>", self.tag);
    }
}

pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// A full HTML page: `<head>` children and a `<body>` tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub head: Vec<Element>,
    pub body: Element,
}

impl Document {
    pub fn new(body: Element) -> Self {
        Self {
            title: String::new(),
            head: Vec::new(),
            body,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        self.head
            .iter()
            .find_map(|e| e.find_by_id(id))
            .or_else(|| self.body.find_by_id(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if let Some(pos) = self.head.iter().position(|e| e.find_by_id(id).is_some()) {
            return self.head[pos].find_by_id_mut(id);
        }
        self.body.find_by_id_mut(id)
    }

    pub fn slot(&self, slot: Slot) -> Option<&Element> {
        self.find(&slot.id())
    }

    pub fn slot_mut(&mut self, slot: Slot) -> Option<&mut Element> {
        let id = slot.id();
        let found = self.find_mut(&id);
        if found.is_none() {
            debug!(%slot, "slot absent, skipping");
        }
        found
    }

    pub fn has_slot(&self, slot: Slot) -> bool {
        self.slot(slot).is_some()
    }

    /// Sets the text of a slot. Returns false when the slot is absent.
    pub fn set_text(&mut self, slot: Slot, text: impl Into<String>) -> bool {
        match self.slot_mut(slot) {
            Some(el) => {
                el.set_text(text);
                true
            }
            None => false,
        }
    }

    pub fn set_attr(&mut self, slot: Slot, name: &str, value: impl Into<String>) -> bool {
        match self.slot_mut(slot) {
            Some(el) => {
                el.set_attr(name, value);
                true
            }
            None => false,
        }
    }

    pub fn append(&mut self, slot: Slot, node: impl Into<Node>) -> bool {
        match self.slot_mut(slot) {
            Some(el) => {
                el.append(node);
                true
            }
            None => false,
        }
    }

    /// Appends to `<head>`. Repeated calls add repeated nodes.
    pub fn append_head(&mut self, element: Element) {
        self.head.push(element);
    }

    pub fn json_ld_blocks(&self) -> Vec<&Element> {
        self.head
            .iter()
            .filter(|e| e.tag == "script" && e.get_attr("type") == Some("application/ld+json"))
            .collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape_text(&self.title));
        for element in &self.head {
            out.push_str(&element.render());
            out.push('\n');
        }
        out.push_str("</head>\n");
        out.push_str(&self.body.render());
        out.push_str("\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_text_and_attributes() {
        let el = Element::new("a")
            .attr("href", "/x?a=1&b=\"2\"")
            .text("<b>bold</b>");
        assert_eq!(
            el.render(),
            "<a href=\"/x?a=1&amp;b=&quot;2&quot;\">&lt;b&gt;bold&lt;/b&gt;</a>"
        );
    }

    #[test]
    fn script_text_cannot_close_the_tag() {
        let el = Element::new("script").text("{\"a\":\"</script>\"}");
        assert_eq!(el.render(), "<script>{\"a\":\"<\\/script>\"}</script>");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let el = Element::new("meta").attr("content", "x");
        assert_eq!(el.render(), "<meta content=\"x\">");
    }

    #[test]
    fn absent_slot_is_skipped() {
        let mut doc = Document::new(Element::new("body").child(Element::new("span").id("nav-brand-name")));
        assert!(doc.set_text(Slot::NavBrand, "Brand"));
        assert!(!doc.set_text(Slot::FooterBrand, "Brand"));
        assert_eq!(doc.slot(Slot::NavBrand).map(|e| e.text_content()), Some("Brand".to_string()));
    }

    #[test]
    fn head_slots_are_found_before_body() {
        let mut doc = Document::new(Element::new("body"));
        doc.append_head(Element::new("meta").id("og-title"));
        assert!(doc.set_attr(Slot::OgTitle, "content", "Hello"));
        assert_eq!(doc.slot(Slot::OgTitle).and_then(|e| e.get_attr("content")), Some("Hello"));
    }
}
