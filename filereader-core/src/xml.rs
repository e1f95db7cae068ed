//! Owned XML element tree.
//!
//! Built from `quick-xml` events. The tree owns all of its strings, so it
//! outlives the text it was parsed from and is handed to the caller whole.

use std::fmt;

use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};

use crate::error::{ReadError, ReadResult};
use crate::format::Format;

/// A parsed XML document with exactly one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

/// An element with its attributes and child nodes, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    /// Character data, already unescaped. CDATA sections land here too.
    Text(String),
}

impl XmlDocument {
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    pub fn into_root(self) -> XmlElement {
        self.root
    }
}

impl XmlElement {
    /// Qualified name, including any namespace prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// First child element whose qualified or local name is `name`.
    pub fn element(&self, name: &str) -> Option<&XmlElement> {
        self.elements()
            .find(|e| e.name == name || e.local_name() == name)
    }

    /// Concatenated text of this element and all of its descendants.
    pub fn value(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(element) => element.collect_text(out),
            }
        }
    }

    fn from_start(start: &BytesStart<'_>, position: impl fmt::Display + Copy) -> ReadResult<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        check_name(&name)?;

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| syntax(&e, position))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            check_name(&key)?;
            let value = attr
                .unescape_value()
                .map_err(|e| syntax(&e, position))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }
}

/// Parses `text` into an element tree.
///
/// Fails with a `ParseError` for unclosed or mismatched tags, invalid
/// element or attribute names, malformed entities, duplicate attributes,
/// `--` inside comments, `]]>` in character data, a missing root, more than
/// one root, or non-whitespace text outside the root.
pub fn parse_xml(text: &str) -> ReadResult<XmlDocument> {
    let mut reader = Reader::from_str(text);
    let mut open: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| syntax(&e, reader.buffer_position()))?;

        match event {
            Event::Start(start) => {
                let element = XmlElement::from_start(&start, reader.buffer_position())?;
                if open.is_empty() && root.is_some() {
                    return Err(ReadError::parse(Format::Xml, "multiple root elements"));
                }
                open.push(element);
            }
            Event::Empty(start) => {
                let element = XmlElement::from_start(&start, reader.buffer_position())?;
                attach(&mut open, &mut root, element)?;
            }
            Event::End(_) => {
                // quick-xml rejects mismatched and unmatched end tags itself.
                let element = open.pop().ok_or_else(|| {
                    ReadError::parse(Format::Xml, "end tag without matching start tag")
                })?;
                attach(&mut open, &mut root, element)?;
            }
            Event::Text(raw) => {
                if contains(&raw, b"]]>") {
                    return Err(ReadError::parse(
                        Format::Xml,
                        "']]>' is not allowed in character data",
                    ));
                }
                let text = raw
                    .unescape()
                    .map_err(|e| syntax(&e, reader.buffer_position()))?;
                push_text(&mut open, text.into_owned())?;
            }
            Event::CData(data) => {
                push_text(&mut open, String::from_utf8_lossy(&data).into_owned())?;
            }
            Event::Comment(body) => {
                if contains(&body, b"--") || body.ends_with(b"-") {
                    return Err(ReadError::parse(
                        Format::Xml,
                        "'--' is not allowed inside a comment",
                    ));
                }
            }
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(ReadError::parse(
            Format::Xml,
            format!("unclosed element <{}> at end of input", unclosed.name),
        ));
    }

    root.map(|root| XmlDocument { root })
        .ok_or_else(|| ReadError::parse(Format::Xml, "no root element"))
}

/// Checks `name` against the XML `Name` production.
fn check_name(name: &str) -> ReadResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            is_name_start(first)
                && chars.all(|c| {
                    is_name_start(c) || c.is_numeric() || matches!(c, '-' | '.' | '\u{B7}')
                })
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ReadError::parse(Format::Xml, format!("invalid name '{name}'")))
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '_' | ':')
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn syntax(err: &impl fmt::Display, position: impl fmt::Display) -> ReadError {
    ReadError::parse(Format::Xml, format!("{err} (at byte {position})"))
}

fn attach(
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> ReadResult<()> {
    match open.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None if root.is_some() => {
            return Err(ReadError::parse(Format::Xml, "multiple root elements"));
        }
        None => *root = Some(element),
    }
    Ok(())
}

fn push_text(open: &mut [XmlElement], text: String) -> ReadResult<()> {
    match open.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Text(text)),
        None if text.trim().is_empty() => {}
        None => {
            return Err(ReadError::parse(
                Format::Xml,
                "text content outside the root element",
            ));
        }
    }
    Ok(())
}

impl fmt::Display for XmlDocument {
    /// Indented rendering, two spaces per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, &self.root, 0)
    }
}

fn write_element(f: &mut fmt::Formatter<'_>, element: &XmlElement, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    write!(f, "{indent}<{}", element.name)?;
    for (key, value) in &element.attributes {
        write!(f, " {key}=\"{}\"", escape(value.as_str()))?;
    }

    let has_elements = element.elements().next().is_some();
    if element.children.is_empty() {
        return write!(f, " />");
    }
    if !has_elements {
        return write!(f, ">{}</{}>", escape(element.value().as_str()), element.name);
    }

    write!(f, ">")?;
    for child in &element.children {
        match child {
            XmlNode::Element(child) => {
                writeln!(f)?;
                write_element(f, child, depth + 1)?;
            }
            XmlNode::Text(text) if text.trim().is_empty() => {}
            XmlNode::Text(text) => {
                writeln!(f)?;
                write!(f, "{indent}  {}", escape(text.trim()))?;
            }
        }
    }
    writeln!(f)?;
    write!(f, "{indent}</{}>", element.name)
}
