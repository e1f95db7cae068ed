use std::fmt;

use crate::format::Format;
use crate::json::JsonDocument;
use crate::xml::XmlDocument;

/// Result of a parameterized read: the value matching the request's format.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Text(String),
    Xml(XmlDocument),
    Json(JsonDocument),
}

impl Document {
    pub fn format(&self) -> Format {
        match self {
            Self::Text(_) => Format::Text,
            Self::Xml(_) => Format::Xml,
            Self::Json(_) => Format::Json,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_xml(&self) -> Option<&XmlDocument> {
        match self {
            Self::Xml(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&JsonDocument> {
        match self {
            Self::Json(doc) => Some(doc),
            _ => None,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Xml(doc) => fmt::Display::fmt(doc, f),
            Self::Json(doc) => fmt::Display::fmt(doc, f),
        }
    }
}
