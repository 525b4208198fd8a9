//! Summary and remarks lookup in an XML documentation file
//!
//! The file layout is the one compilers emit next to a binary:
//!
//! ```xml
//! <doc>
//!   <members>
//!     <member name="T:Namespace.TypeName">
//!       <summary>Text...</summary>
//!       <remarks>Text...</remarks>
//!     </member>
//!   </members>
//! </doc>
//! ```
//!
//! The whole file is parsed when the store is loaded. A file that exists but
//! is malformed or lacks `<members>` is an error, never an empty store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use regex::bytes::Regex;

use super::constants::{
    MEMBER_ELEMENT, MEMBERS_ELEMENT, NAME_ATTRIBUTE, REMARKS_ELEMENT, SUMMARY_ELEMENT,
};
use super::error::{DocsError, DocsResult, IoContext};

static XML_DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*<\?xml\s[^>]*?\bencoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#)
        .expect("Failed to compile XML declaration regex")
});

/// Documentation text of one member
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDocs {
    /// Trimmed text of the first `<summary>` element
    pub summary: Option<String>,
    /// Trimmed text of the first `<remarks>` element
    pub remarks: Option<String>,
}

/// Parsed documentation file, indexed by member identifier
#[derive(Debug)]
pub struct DocumentationStore {
    path: PathBuf,
    members: HashMap<String, MemberDocs>,
}

impl DocumentationStore {
    /// Load and index the documentation file at `path`
    pub fn load(path: impl AsRef<Path>) -> DocsResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).with_io_context(&format!(
            "Failed to read documentation file {}",
            path.display()
        ))?;
        let content = decode_document(path, &bytes)?;
        Self::parse(path, &content)
    }

    /// Index documentation content that was read from `path`
    pub fn parse(path: impl AsRef<Path>, content: &str) -> DocsResult<Self> {
        let path = path.as_ref().to_path_buf();
        let members = MembersParser::new(&path).parse(content)?;
        Ok(Self { path, members })
    }

    /// Summary of the member with the given identifier
    pub fn get_summary(&self, id: &str) -> Option<&str> {
        self.members.get(id)?.summary.as_deref()
    }

    /// Remarks of the member with the given identifier
    pub fn get_remarks(&self, id: &str) -> Option<&str> {
        self.members.get(id)?.remarks.as_deref()
    }

    pub fn get_member(&self, id: &str) -> Option<&MemberDocs> {
        self.members.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains_key(id)
    }

    /// Number of distinct documented members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Decode raw file bytes into a string
///
/// A byte order mark wins, then the `encoding` of the XML declaration, then
/// UTF-8. Bytes that are invalid for the chosen encoding make the file malformed.
fn decode_document(file: &Path, bytes: &[u8]) -> DocsResult<String> {
    let (encoding, bom_length) = match Encoding::for_bom(bytes) {
        Some(found) => found,
        None => (declared_encoding(bytes).unwrap_or(UTF_8), 0),
    };

    let (content, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_length..]);
    if had_errors {
        return Err(DocsError::XmlParsing {
            file: file.to_path_buf(),
            position: 0,
            message: format!("invalid {} byte sequence", encoding.name()),
        });
    }

    Ok(content.into_owned())
}

/// Encoding named by the XML declaration of an ASCII-compatible document
fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let captures = XML_DECLARATION_RE.captures(bytes)?;
    let encoding = Encoding::for_label(&captures[1])?;
    // UTF-16 without a byte order mark cannot have been read this far as ASCII
    if encoding == UTF_16LE || encoding == UTF_16BE {
        return None;
    }
    Some(encoding)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocField {
    Summary,
    Remarks,
}

// Element depths, counted as the number of enclosing elements
const ROOT_DEPTH: usize = 0;
const MEMBERS_DEPTH: usize = 1;
const MEMBER_DEPTH: usize = 2;
const FIELD_DEPTH: usize = 3;

/// Event-driven builder for the member index
struct MembersParser<'a> {
    file: &'a Path,
    depth: usize,
    root_seen: bool,
    members_seen: bool,
    in_members: bool,
    current: Option<(String, MemberDocs)>,
    capture: Option<DocField>,
    text: String,
    members: HashMap<String, MemberDocs>,
}

impl<'a> MembersParser<'a> {
    fn new(file: &'a Path) -> Self {
        Self {
            file,
            depth: 0,
            root_seen: false,
            members_seen: false,
            in_members: false,
            current: None,
            capture: None,
            text: String::new(),
            members: HashMap::new(),
        }
    }

    fn parse(mut self, content: &str) -> DocsResult<HashMap<String, MemberDocs>> {
        let mut reader = Reader::from_str(content.trim_start_matches('\u{feff}'));
        let mut buf = Vec::new();

        loop {
            let event = match reader.read_event_into(&mut buf) {
                Ok(event) => event,
                Err(e) => return Err(self.malformed(&reader, e.to_string())),
            };

            match event {
                Event::Start(ref e) => {
                    self.open_element(&reader, e)?;
                    self.depth += 1;
                }
                Event::Empty(ref e) => {
                    self.open_element(&reader, e)?;
                    self.close_element();
                }
                Event::End(_) => {
                    if self.depth == ROOT_DEPTH {
                        return Err(self.malformed(&reader, "unmatched end tag".to_string()));
                    }
                    self.depth -= 1;
                    self.close_element();
                }
                Event::Text(ref e) => {
                    let raw = self.utf8(&reader, e)?;
                    if self.depth == ROOT_DEPTH && !raw.trim().is_empty() {
                        let message = "text outside of the root element".to_string();
                        return Err(self.malformed(&reader, message));
                    }
                    if self.capture.is_some() {
                        let text = quick_xml::escape::unescape(raw)
                            .map_err(|e| self.malformed(&reader, e.to_string()))?;
                        self.text.push_str(&text);
                    }
                }
                Event::CData(ref e) => {
                    if self.capture.is_some() {
                        let raw = self.utf8(&reader, e)?;
                        self.text.push_str(raw);
                    }
                }
                Event::GeneralRef(ref e) => {
                    if self.depth == ROOT_DEPTH {
                        let message = "reference outside of the root element".to_string();
                        return Err(self.malformed(&reader, message));
                    }
                    if self.capture.is_some() {
                        let name = self.utf8(&reader, e)?;
                        let reference = format!("&{};", name);
                        let text = quick_xml::escape::unescape(&reference)
                            .map_err(|e| self.malformed(&reader, e.to_string()))?;
                        self.text.push_str(&text);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if self.depth != ROOT_DEPTH {
            let message = "unexpected end of file inside an element".to_string();
            return Err(self.malformed(&reader, message));
        }
        if !self.root_seen {
            return Err(self.malformed(&reader, "no root element".to_string()));
        }
        if !self.members_seen {
            return Err(DocsError::MissingElement {
                file: self.file.to_path_buf(),
                element: MEMBERS_ELEMENT.to_string(),
            });
        }

        Ok(self.members)
    }

    /// Handle an opening (or empty) tag at the current depth
    fn open_element(&mut self, reader: &Reader<&[u8]>, e: &BytesStart) -> DocsResult<()> {
        let name = e.name();
        let name = name.as_ref();

        match self.depth {
            ROOT_DEPTH => {
                if self.root_seen {
                    return Err(self.malformed(reader, "multiple root elements".to_string()));
                }
                self.root_seen = true;
            }
            MEMBERS_DEPTH if name == MEMBERS_ELEMENT.as_bytes() && !self.members_seen => {
                self.members_seen = true;
                self.in_members = true;
            }
            MEMBER_DEPTH if self.in_members && name == MEMBER_ELEMENT.as_bytes() => {
                let id = self.member_name(reader, e)?;
                self.current = Some((id, MemberDocs::default()));
            }
            FIELD_DEPTH => {
                let field = match name {
                    n if n == SUMMARY_ELEMENT.as_bytes() => Some(DocField::Summary),
                    n if n == REMARKS_ELEMENT.as_bytes() => Some(DocField::Remarks),
                    _ => None,
                };
                if let (Some(field), Some((_, docs))) = (field, &self.current) {
                    // Only the first element of each kind counts
                    let taken = match field {
                        DocField::Summary => docs.summary.is_some(),
                        DocField::Remarks => docs.remarks.is_some(),
                    };
                    if !taken {
                        self.capture = Some(field);
                        self.text.clear();
                    }
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Handle the end of the element at the current depth
    fn close_element(&mut self) {
        match self.depth {
            MEMBERS_DEPTH => self.in_members = false,
            MEMBER_DEPTH => {
                if let Some((id, docs)) = self.current.take() {
                    self.members.entry(id).or_insert(docs);
                }
            }
            FIELD_DEPTH => {
                let capture = self.capture.take();
                if let (Some(field), Some((_, docs))) = (capture, self.current.as_mut()) {
                    let text = Some(self.text.trim().to_string());
                    match field {
                        DocField::Summary => docs.summary = text,
                        DocField::Remarks => docs.remarks = text,
                    }
                }
                self.text.clear();
            }
            _ => {}
        }
    }

    fn member_name(&self, reader: &Reader<&[u8]>, e: &BytesStart) -> DocsResult<String> {
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.malformed(reader, err.to_string()))?;
            if attr.key.as_ref() == NAME_ATTRIBUTE.as_bytes() {
                let raw = self.utf8(reader, &attr.value)?;
                let value = quick_xml::escape::unescape(raw)
                    .map_err(|err| self.malformed(reader, err.to_string()))?;
                return Ok(value.into_owned());
            }
        }

        Err(DocsError::MissingAttribute {
            file: self.file.to_path_buf(),
            element: MEMBER_ELEMENT.to_string(),
            attribute: NAME_ATTRIBUTE.to_string(),
        })
    }

    fn utf8<'b>(&self, reader: &Reader<&[u8]>, bytes: &'b [u8]) -> DocsResult<&'b str> {
        std::str::from_utf8(bytes).map_err(|e| self.malformed(reader, e.to_string()))
    }

    fn malformed(&self, reader: &Reader<&[u8]>, message: String) -> DocsError {
        DocsError::XmlParsing {
            file: self.file.to_path_buf(),
            position: reader.buffer_position() as u64,
            message,
        }
    }
}

#[cfg(test)]
#[path = "documentation_store_tests.rs"]
mod tests;
