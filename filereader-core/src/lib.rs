//! Composable read pipeline for text, XML and JSON files.
//!
//! Every read runs the same fixed sequence, whatever combination of
//! capabilities the caller asks for:
//!
//! 1. validate the request shape
//! 2. authorize (optional) through an [`AccessAuthorizer`]
//! 3. read the raw file content
//! 4. decrypt (optional) the entire content through a [`TextDecryptor`]
//! 5. parse (XML/JSON only)
//!
//! A denied request never touches the filesystem. Any failure aborts the read
//! and surfaces unchanged; see [`ErrorKind`] for the classification.
//!
//! # Entry points
//!
//! - [`FileReader::read`] / [`FileReader::read_async`] take a [`ReadRequest`]
//!   and use the capabilities the reader was built with.
//! - The named operations (`read_text`, `read_xml_authorized`,
//!   `read_encrypted_json`, ...) take the capability explicitly.

mod document;
mod error;
mod format;
mod json;
mod reader;
mod request;
mod source;
mod xml;

pub use document::Document;
pub use error::{ErrorKind, ReadError, ReadResult};
pub use format::Format;
pub use json::{JsonDocument, parse_json};
pub use reader::FileReader;
pub use request::ReadRequest;
pub use source::{read_raw, read_raw_async};
pub use xml::{XmlDocument, XmlElement, XmlNode, parse_xml};

pub use filereader_access::AccessAuthorizer;
pub use filereader_crypto::TextDecryptor;
