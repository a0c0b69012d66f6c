//! `AndroidManifest.xml` editing with quick-xml.
//!
//! The document is streamed event by event and written back unchanged,
//! except for the new `uses-permission` elements inserted right before the
//! root's end tag. Comments, attribute order, and formatting survive.

use std::collections::HashSet;
use std::fmt::Display;

use droidscaff_core::{
    application::{ApplicationError, ports::ManifestEditor},
    domain::{ANDROID_NAMESPACE_URI, ManifestEdit, manifest::USES_PERMISSION},
    error::{DroidscaffError, DroidscaffResult},
};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::{debug, instrument};

/// Prefix used when the root does not bind the Android namespace yet.
const DEFAULT_ANDROID_PREFIX: &str = "android";

const INDENT: &str = "    ";

/// [`ManifestEditor`] backed by quick-xml.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlManifestEditor;

impl XmlManifestEditor {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestEditor for XmlManifestEditor {
    #[instrument(skip_all, fields(requested = permissions.len()))]
    fn add_permissions(
        &self,
        document: &str,
        permissions: &[String],
    ) -> DroidscaffResult<ManifestEdit> {
        let document = without_bom(document);
        let declared = declared_permissions(document)?;

        let mut seen = HashSet::new();
        let mut missing = Vec::new();
        let mut already_present = Vec::new();
        for permission in permissions {
            if !seen.insert(permission.as_str()) {
                continue;
            }
            if declared.contains(permission) {
                already_present.push(permission.clone());
            } else {
                missing.push(permission.clone());
            }
        }

        if missing.is_empty() {
            debug!("Nothing to add");
            return Ok(ManifestEdit::unchanged(already_present));
        }

        let content = append_permissions(document, &missing)?;
        debug!(added = missing.len(), "Permissions appended to root");

        Ok(ManifestEdit {
            content: Some(content),
            added: missing,
            already_present,
        })
    }
}

fn without_bom(document: &str) -> &str {
    document.strip_prefix('\u{feff}').unwrap_or(document)
}

/// `\r\n` when the document already uses it, `\n` otherwise.
fn line_ending(document: &str) -> &'static str {
    if document.contains("\r\n") { "\r\n" } else { "\n" }
}

fn malformed(e: impl Display) -> DroidscaffError {
    ApplicationError::ManifestMalformed {
        reason: e.to_string(),
    }
    .into()
}

/// Prefix bindings (`xmlns:p="uri"`) open at one element.
type Scope = Vec<(String, String)>;

fn namespace_bindings(start: &BytesStart<'_>) -> DroidscaffResult<Scope> {
    let mut scope = Scope::new();
    for attr in start.attributes() {
        let attr = attr.map_err(malformed)?;
        if let Some(prefix) = attr.key.as_ref().strip_prefix(b"xmlns:") {
            let prefix = String::from_utf8_lossy(prefix).into_owned();
            let uri = attr.unescape_value().map_err(malformed)?.into_owned();
            scope.push((prefix, uri));
        }
    }
    Ok(scope)
}

fn resolve<'a>(scopes: &'a [Scope], prefix: &str) -> Option<&'a str> {
    scopes
        .iter()
        .rev()
        .flat_map(|scope| scope.iter().rev())
        .find(|(p, _)| p == prefix)
        .map(|(_, uri)| uri.as_str())
}

/// `android:name` values of `uses-permission` children of the root.
fn declared_permissions(document: &str) -> DroidscaffResult<HashSet<String>> {
    let mut reader = Reader::from_str(document);
    let mut scopes: Vec<Scope> = Vec::new();
    let mut declared = HashSet::new();
    let mut seen_root = false;

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(start) => {
                seen_root = true;
                scopes.push(namespace_bindings(&start)?);
                if scopes.len() == 2 {
                    collect_permission(&start, &scopes, &mut declared)?;
                }
            }
            Event::Empty(start) => {
                seen_root = true;
                scopes.push(namespace_bindings(&start)?);
                if scopes.len() == 2 {
                    collect_permission(&start, &scopes, &mut declared)?;
                }
                scopes.pop();
            }
            Event::End(_) => {
                scopes
                    .pop()
                    .ok_or_else(|| malformed("unbalanced end tag"))?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(malformed("document has no root element"));
    }
    if !scopes.is_empty() {
        return Err(malformed("unexpected end of document"));
    }
    Ok(declared)
}

fn collect_permission(
    start: &BytesStart<'_>,
    scopes: &[Scope],
    declared: &mut HashSet<String>,
) -> DroidscaffResult<()> {
    if start.local_name().as_ref() != USES_PERMISSION.as_bytes() {
        return Ok(());
    }

    for attr in start.attributes() {
        let attr = attr.map_err(malformed)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let Some((prefix, local)) = key.split_once(':') else {
            continue;
        };
        if local == "name" && resolve(scopes, prefix) == Some(ANDROID_NAMESPACE_URI) {
            declared.insert(attr.unescape_value().map_err(malformed)?.into_owned());
        }
    }
    Ok(())
}

/// Re-emit `document`, inserting one `uses-permission` per entry before the
/// root closes. A fresh `utf-8` declaration replaces any existing one.
fn append_permissions(document: &str, permissions: &[String]) -> DroidscaffResult<String> {
    let mut reader = Reader::from_str(document);
    let mut writer = Writer::new(Vec::new());
    let mut depth = 0usize;
    let mut prefix = DEFAULT_ANDROID_PREFIX.to_string();
    let mut at_line_start = true;
    let newline = line_ending(document);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(malformed)?;
    if !document.trim_start().starts_with("<?xml") {
        writer
            .write_event(Event::Text(BytesText::new(newline)))
            .map_err(malformed)?;
    }

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Decl(_) => {}
            Event::Start(start) if depth == 0 => {
                let (root, bound) = bind_android_namespace(start.into_owned())?;
                prefix = bound;
                writer.write_event(Event::Start(root)).map_err(malformed)?;
                depth += 1;
                at_line_start = false;
            }
            Event::Empty(start) if depth == 0 => {
                // Self-closing root: open it, add children, close it.
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                let (root, bound) = bind_android_namespace(start.into_owned())?;
                writer.write_event(Event::Start(root)).map_err(malformed)?;
                writer
                    .write_event(Event::Text(BytesText::new(newline)))
                    .map_err(malformed)?;
                write_permissions(&mut writer, &bound, permissions, newline)?;
                writer
                    .write_event(Event::End(BytesEnd::new(name)))
                    .map_err(malformed)?;
                at_line_start = false;
            }
            Event::Start(start) => {
                depth += 1;
                writer.write_event(Event::Start(start)).map_err(malformed)?;
                at_line_start = false;
            }
            Event::End(end) => {
                if depth == 1 {
                    if !at_line_start {
                        writer
                            .write_event(Event::Text(BytesText::new(newline)))
                            .map_err(malformed)?;
                    }
                    write_permissions(&mut writer, &prefix, permissions, newline)?;
                }
                depth = depth.saturating_sub(1);
                writer.write_event(Event::End(end)).map_err(malformed)?;
                at_line_start = false;
            }
            Event::Text(text) => {
                at_line_start = text.ends_with(b"\n");
                writer.write_event(Event::Text(text)).map_err(malformed)?;
            }
            Event::Eof => break,
            other => {
                writer.write_event(other).map_err(malformed)?;
                at_line_start = false;
            }
        }
    }

    String::from_utf8(writer.into_inner()).map_err(malformed)
}

/// Returns the root with the Android namespace bound, and its prefix.
///
/// When `android` is already bound to another URI the first free
/// `android1`, `android2`, ... prefix is used instead.
fn bind_android_namespace(
    mut root: BytesStart<'static>,
) -> DroidscaffResult<(BytesStart<'static>, String)> {
    let bindings = namespace_bindings(&root)?;
    if let Some((prefix, _)) = bindings
        .iter()
        .find(|(_, uri)| uri == ANDROID_NAMESPACE_URI)
    {
        return Ok((root, prefix.clone()));
    }

    let taken = |candidate: &str| bindings.iter().any(|(p, _)| p == candidate);
    let prefix = std::iter::once(DEFAULT_ANDROID_PREFIX.to_string())
        .chain((1..).map(|n| format!("{DEFAULT_ANDROID_PREFIX}{n}")))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| DEFAULT_ANDROID_PREFIX.to_string());

    let key = format!("xmlns:{prefix}");
    root.push_attribute((key.as_str(), ANDROID_NAMESPACE_URI));
    debug!(prefix = %prefix, "Bound Android namespace on root");
    Ok((root, prefix))
}

fn write_permissions(
    writer: &mut Writer<Vec<u8>>,
    prefix: &str,
    permissions: &[String],
    newline: &str,
) -> DroidscaffResult<()> {
    let attribute = format!("{prefix}:name");
    for permission in permissions {
        let mut element = BytesStart::new(USES_PERMISSION);
        element.push_attribute((attribute.as_str(), permission.as_str()));

        writer
            .write_event(Event::Text(BytesText::new(INDENT)))
            .map_err(malformed)?;
        writer.write_event(Event::Empty(element)).map_err(malformed)?;
        writer
            .write_event(Event::Text(BytesText::new(newline)))
            .map_err(malformed)?;
    }
    Ok(())
}
