//! Console front end for the filereader pipeline.
//!
//! The interactive session mirrors a menu-driven workflow: pick a format,
//! enter a path, choose encryption and role-based security, then see the
//! document or a one-line error. Input and output are generic so sessions
//! can be driven from tests.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use filereader_access::{AccessPolicy, RoleAllowListAuthorizer};
use filereader_core::{Document, FileReader, Format, ReadError, ReadRequest};
use filereader_crypto::ReverseTextDecryptor;
use tracing::debug;

/// Builds the reader the CLI uses: reverse decryption and an allow-list
/// authorizer from the policy file plus any extra allowed paths.
pub fn build_reader(policy_path: Option<&Path>, extra_allowed: &[String]) -> FileReader {
    let policy = policy_path
        .map(AccessPolicy::load_from)
        .unwrap_or_default()
        .with_allowed_paths(extra_allowed.iter().cloned());
    let authorizer = RoleAllowListAuthorizer::from_policy(&policy);
    debug!(allowed_paths = authorizer.allowed_path_count(), "Configured authorizer");

    FileReader::new()
        .with_decryptor(Arc::new(ReverseTextDecryptor))
        .with_authorizer(Arc::new(authorizer))
}

/// `y`/`yes` (any case) is yes, blank takes `default_yes`, anything else is no.
pub fn is_yes(input: &str, default_yes: bool) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return default_yes;
    }
    trimmed.eq_ignore_ascii_case("y") || trimmed.eq_ignore_ascii_case("yes")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Read(Format),
    Exit,
    Invalid,
}

pub fn parse_menu_choice(input: &str) -> MenuChoice {
    match input.trim() {
        "1" => MenuChoice::Read(Format::Text),
        "2" => MenuChoice::Read(Format::Xml),
        "3" => MenuChoice::Read(Format::Json),
        x if x.eq_ignore_ascii_case("x") => MenuChoice::Exit,
        _ => MenuChoice::Invalid,
    }
}

/// One-line diagnostic: `Error: <kind>: <message>`.
pub fn render_error(err: &ReadError) -> String {
    format!("Error: {}: {}", err.kind(), err)
}

/// Document framed by start/end banners.
pub fn render_document(doc: &Document) -> String {
    let label = doc.format().label();
    format!("--- {label} CONTENT START ---\n{doc}\n--- {label} CONTENT END ---")
}

struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Writes `text` and reads one trimmed line. `None` at end of input.
    fn ask(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

/// Runs the menu loop until the user exits or input ends.
pub async fn run_interactive<R: BufRead, W: Write>(
    reader: &FileReader,
    input: R,
    output: W,
) -> io::Result<()> {
    let mut console = Console { input, output };
    console.say("File Reader CLI")?;
    console.say("----------------")?;

    loop {
        console.say("")?;
        console.say("Choose an option:")?;
        console.say("1) Read Text")?;
        console.say("2) Read XML")?;
        console.say("3) Read JSON")?;
        console.say("X) Exit")?;
        let Some(choice) = console.ask("Selection: ")? else {
            break;
        };

        let format = match parse_menu_choice(&choice) {
            MenuChoice::Read(format) => format,
            MenuChoice::Exit => break,
            MenuChoice::Invalid => {
                console.say("Invalid selection.")?;
                continue;
            }
        };

        let Some(path) = console.ask("Enter file path: ")? else {
            break;
        };
        if path.is_empty() {
            console.say("Path is required.")?;
            continue;
        }

        let Some(use_encryption) = console.ask("Use encryption (y/N)? ")? else {
            break;
        };
        let Some(use_authorization) = console.ask("Use role-based security (y/N)? ")? else {
            break;
        };

        let mut request = ReadRequest::new(format, path);
        if is_yes(&use_encryption, false) {
            request = request.encrypted();
        }
        if is_yes(&use_authorization, false) {
            let Some(role) = console.ask("Enter role (e.g., admin or user): ")? else {
                break;
            };
            if role.is_empty() {
                console.say("Role is required when role-based security is enabled.")?;
                continue;
            }
            request = request.authorized_as(role);
        }

        match reader.read_async(&request).await {
            Ok(doc) => console.say(&render_document(&doc))?,
            Err(err) => console.say(&render_error(&err))?,
        }

        console.say("")?;
        match console.ask("Read another file (Y/n)? ")? {
            Some(again) if is_yes(&again, true) => {}
            _ => break,
        }
    }

    console.output.flush()
}
