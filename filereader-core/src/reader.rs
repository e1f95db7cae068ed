//! The reader facade: composes authorization, raw reads, decryption and
//! parsing into every supported combination through one shared plan.

use std::fmt;
use std::sync::Arc;

use filereader_access::AccessAuthorizer;
use filereader_crypto::TextDecryptor;
use tracing::{debug, warn};

use crate::document::Document;
use crate::error::{ReadError, ReadResult};
use crate::format::Format;
use crate::json::{JsonDocument, parse_json};
use crate::request::ReadRequest;
use crate::source::{check_path, read_raw, read_raw_async};
use crate::xml::{XmlDocument, parse_xml};

/// Reads text, XML and JSON files, optionally decrypting and authorizing.
///
/// The reader holds no per-read state. Capabilities configured with
/// [`with_decryptor`](Self::with_decryptor) and
/// [`with_authorizer`](Self::with_authorizer) are shared read-only by every
/// [`read`](Self::read) call; the named operations take theirs explicitly.
#[derive(Clone, Default)]
pub struct FileReader {
    decryptor: Option<Arc<dyn TextDecryptor>>,
    authorizer: Option<Arc<dyn AccessAuthorizer>>,
}

impl fmt::Debug for FileReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileReader")
            .field("decryptor", &self.decryptor.as_ref().map(|d| d.name()))
            .field("authorizer", &self.authorizer.is_some())
            .finish()
    }
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decryptor(mut self, decryptor: Arc<dyn TextDecryptor>) -> Self {
        self.decryptor = Some(decryptor);
        self
    }

    pub fn with_authorizer(mut self, authorizer: Arc<dyn AccessAuthorizer>) -> Self {
        self.authorizer = Some(authorizer);
        self
    }

    // ── Parameterized entry point ───────────────────────────────

    /// Runs `request` against the configured capabilities.
    ///
    /// Fails with `InvalidArgument` when the request asks for encryption or
    /// authorization and the reader has no decryptor or authorizer.
    pub fn read(&self, request: &ReadRequest) -> ReadResult<Document> {
        let plan = self.plan_for(request)?;
        let plain = plan.fetch()?;
        plan.parse(plain)
    }

    pub async fn read_async(&self, request: &ReadRequest) -> ReadResult<Document> {
        let plan = self.plan_for(request)?;
        let plain = plan.fetch_async().await?;
        plan.parse(plain)
    }

    fn plan_for<'a>(&'a self, request: &'a ReadRequest) -> ReadResult<Plan<'a>> {
        request.validate()?;

        let mut plan = Plan::new(request.format, &request.path);
        if request.use_authorization {
            let authorizer = self.authorizer.as_deref().ok_or_else(|| {
                ReadError::invalid_argument("authorization requested but no authorizer configured")
            })?;
            plan = plan.authorized(request.role.as_deref().unwrap_or_default(), authorizer);
        }
        if request.use_encryption {
            let decryptor = self.decryptor.as_deref().ok_or_else(|| {
                ReadError::invalid_argument("encryption requested but no decryptor configured")
            })?;
            plan = plan.decrypted(decryptor);
        }
        Ok(plan)
    }

    // ── Text ────────────────────────────────────────────────────

    pub fn read_text(&self, path: &str) -> ReadResult<String> {
        Plan::new(Format::Text, path).fetch()
    }

    pub async fn read_text_async(&self, path: &str) -> ReadResult<String> {
        Plan::new(Format::Text, path).fetch_async().await
    }

    pub fn read_text_authorized(
        &self,
        path: &str,
        role: &str,
        authorizer: &dyn AccessAuthorizer,
    ) -> ReadResult<String> {
        Plan::new(Format::Text, path).authorized(role, authorizer).fetch()
    }

    pub async fn read_text_authorized_async(
        &self,
        path: &str,
        role: &str,
        authorizer: &dyn AccessAuthorizer,
    ) -> ReadResult<String> {
        Plan::new(Format::Text, path)
            .authorized(role, authorizer)
            .fetch_async()
            .await
    }

    pub fn read_encrypted_text(
        &self,
        path: &str,
        decryptor: &dyn TextDecryptor,
    ) -> ReadResult<String> {
        Plan::new(Format::Text, path).decrypted(decryptor).fetch()
    }

    pub async fn read_encrypted_text_async(
        &self,
        path: &str,
        decryptor: &dyn TextDecryptor,
    ) -> ReadResult<String> {
        Plan::new(Format::Text, path)
            .decrypted(decryptor)
            .fetch_async()
            .await
    }

    // ── XML ─────────────────────────────────────────────────────

    pub fn read_xml(&self, path: &str) -> ReadResult<XmlDocument> {
        parse_xml(&Plan::new(Format::Xml, path).fetch()?)
    }

    pub async fn read_xml_async(&self, path: &str) -> ReadResult<XmlDocument> {
        parse_xml(&Plan::new(Format::Xml, path).fetch_async().await?)
    }

    pub fn read_xml_authorized(
        &self,
        path: &str,
        role: &str,
        authorizer: &dyn AccessAuthorizer,
    ) -> ReadResult<XmlDocument> {
        parse_xml(&Plan::new(Format::Xml, path).authorized(role, authorizer).fetch()?)
    }

    pub async fn read_xml_authorized_async(
        &self,
        path: &str,
        role: &str,
        authorizer: &dyn AccessAuthorizer,
    ) -> ReadResult<XmlDocument> {
        let plain = Plan::new(Format::Xml, path)
            .authorized(role, authorizer)
            .fetch_async()
            .await?;
        parse_xml(&plain)
    }

    pub fn read_encrypted_xml(
        &self,
        path: &str,
        decryptor: &dyn TextDecryptor,
    ) -> ReadResult<XmlDocument> {
        parse_xml(&Plan::new(Format::Xml, path).decrypted(decryptor).fetch()?)
    }

    pub async fn read_encrypted_xml_async(
        &self,
        path: &str,
        decryptor: &dyn TextDecryptor,
    ) -> ReadResult<XmlDocument> {
        let plain = Plan::new(Format::Xml, path)
            .decrypted(decryptor)
            .fetch_async()
            .await?;
        parse_xml(&plain)
    }

    // ── JSON ────────────────────────────────────────────────────

    pub fn read_json(&self, path: &str) -> ReadResult<JsonDocument> {
        parse_json(&Plan::new(Format::Json, path).fetch()?)
    }

    pub async fn read_json_async(&self, path: &str) -> ReadResult<JsonDocument> {
        parse_json(&Plan::new(Format::Json, path).fetch_async().await?)
    }

    pub fn read_json_authorized(
        &self,
        path: &str,
        role: &str,
        authorizer: &dyn AccessAuthorizer,
    ) -> ReadResult<JsonDocument> {
        parse_json(&Plan::new(Format::Json, path).authorized(role, authorizer).fetch()?)
    }

    pub async fn read_json_authorized_async(
        &self,
        path: &str,
        role: &str,
        authorizer: &dyn AccessAuthorizer,
    ) -> ReadResult<JsonDocument> {
        let plain = Plan::new(Format::Json, path)
            .authorized(role, authorizer)
            .fetch_async()
            .await?;
        parse_json(&plain)
    }

    pub fn read_encrypted_json(
        &self,
        path: &str,
        decryptor: &dyn TextDecryptor,
    ) -> ReadResult<JsonDocument> {
        parse_json(&Plan::new(Format::Json, path).decrypted(decryptor).fetch()?)
    }

    pub async fn read_encrypted_json_async(
        &self,
        path: &str,
        decryptor: &dyn TextDecryptor,
    ) -> ReadResult<JsonDocument> {
        let plain = Plan::new(Format::Json, path)
            .decrypted(decryptor)
            .fetch_async()
            .await?;
        parse_json(&plain)
    }
}

/// The capabilities one read uses. Built per call, never stored.
struct Plan<'a> {
    format: Format,
    path: &'a str,
    access: Option<Access<'a>>,
    decryptor: Option<&'a dyn TextDecryptor>,
}

struct Access<'a> {
    role: &'a str,
    authorizer: &'a dyn AccessAuthorizer,
}

impl<'a> Plan<'a> {
    fn new(format: Format, path: &'a str) -> Self {
        Self {
            format,
            path,
            access: None,
            decryptor: None,
        }
    }

    fn authorized(mut self, role: &'a str, authorizer: &'a dyn AccessAuthorizer) -> Self {
        self.access = Some(Access { role, authorizer });
        self
    }

    fn decrypted(mut self, decryptor: &'a dyn TextDecryptor) -> Self {
        self.decryptor = Some(decryptor);
        self
    }

    /// Validate and authorize. Runs before any filesystem access.
    fn admit(&self) -> ReadResult<()> {
        check_path(self.path)?;

        let Some(access) = &self.access else {
            return Ok(());
        };
        if access.role.trim().is_empty() {
            return Err(ReadError::invalid_argument(
                "role must not be blank when authorization is requested",
            ));
        }
        if !access.authorizer.can_read(self.path, access.role) {
            warn!(path = %self.path, role = %access.role, format = %self.format, "Read denied");
            return Err(ReadError::Unauthorized {
                role: access.role.to_string(),
                path: self.path.to_string(),
            });
        }
        Ok(())
    }

    fn reveal(&self, raw: String) -> ReadResult<String> {
        match self.decryptor {
            Some(decryptor) => {
                debug!(path = %self.path, decryptor = decryptor.name(), "Decrypting content");
                Ok(decryptor.decrypt(&raw)?)
            }
            None => Ok(raw),
        }
    }

    fn fetch(&self) -> ReadResult<String> {
        self.admit()?;
        self.trace();
        let raw = read_raw(self.path)?;
        self.reveal(raw)
    }

    /// Same as [`fetch`](Self::fetch); only the raw read suspends.
    async fn fetch_async(&self) -> ReadResult<String> {
        self.admit()?;
        self.trace();
        let raw = read_raw_async(self.path).await?;
        self.reveal(raw)
    }

    fn parse(&self, plain: String) -> ReadResult<Document> {
        match self.format {
            Format::Text => Ok(Document::Text(plain)),
            Format::Xml => parse_xml(&plain).map(Document::Xml),
            Format::Json => parse_json(&plain).map(Document::Json),
        }
    }

    fn trace(&self) {
        debug!(
            path = %self.path,
            format = %self.format,
            authorized = self.access.is_some(),
            encrypted = self.decryptor.is_some(),
            "Reading file"
        );
    }
}
