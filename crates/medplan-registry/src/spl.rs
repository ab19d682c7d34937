//! SPL XML → label document conversion.
//!
//! Mapping rules:
//! - element with children or attributes → map, in document order
//! - attribute `x` → key `@x`
//! - element text next to children or attributes → key `#text`, after them
//! - element with only text → text scalar
//! - empty element → absent
//! - repeated child names collapse into a sequence at the first one's position

use std::borrow::Cow;

use medplan_core::LabelDocument;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{RegistryError, RegistryResult};

const TEXT_KEY: &str = "#text";
const ATTR_PREFIX: &str = "@";

/// An element still being read.
struct OpenElement {
    name: String,
    entries: Vec<(String, LabelDocument)>,
    text: String,
}

impl OpenElement {
    fn start(e: &BytesStart<'_>) -> RegistryResult<Self> {
        let mut entries = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|e| RegistryError::Xml(e.to_string()))?;
            let key = format!("{}{}", ATTR_PREFIX, String::from_utf8_lossy(attr.key.as_ref()));
            let value = attr
                .unescape_value()
                .map(Cow::into_owned)
                .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
            entries.push((key, LabelDocument::text(value)));
        }

        Ok(Self {
            name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            entries,
            text: String::new(),
        })
    }

    fn finish(self) -> (String, LabelDocument) {
        let text = self.text.trim();
        let mut entries = self.entries;

        let value = match (entries.is_empty(), text.is_empty()) {
            (true, true) => LabelDocument::Absent,
            (true, false) => LabelDocument::text(text),
            (false, _) => {
                if !text.is_empty() {
                    entries.push((TEXT_KEY.to_string(), LabelDocument::text(text)));
                }
                LabelDocument::Map(entries)
            }
        };
        (self.name, value)
    }
}

/// Insert a child, collapsing repeated names into a sequence.
fn push_child(entries: &mut Vec<(String, LabelDocument)>, name: String, value: LabelDocument) {
    match entries.iter_mut().find(|(k, _)| *k == name) {
        Some((_, LabelDocument::Sequence(items))) => items.push(value),
        Some((_, existing)) => {
            let first = std::mem::take(existing);
            *existing = LabelDocument::Sequence(vec![first, value]);
        }
        None => entries.push((name, value)),
    }
}

/// Convert an SPL XML document to a [`LabelDocument`].
pub fn parse_spl_xml(xml: &str) -> RegistryResult<LabelDocument> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<OpenElement> = Vec::new();
    let mut root: Vec<(String, LabelDocument)> = Vec::new();

    loop {
        let event = reader.read_event().map_err(|e| {
            RegistryError::Xml(format!("at byte {}: {}", reader.buffer_position(), e))
        })?;

        match event {
            Event::Start(e) => stack.push(OpenElement::start(&e)?),
            Event::Empty(e) => {
                let (name, value) = OpenElement::start(&e)?.finish();
                attach(&mut stack, &mut root, name, value);
            }
            Event::End(_) => {
                let open = stack
                    .pop()
                    .ok_or_else(|| RegistryError::Xml("closing tag without opening tag".into()))?;
                let (name, value) = open.finish();
                attach(&mut stack, &mut root, name, value);
            }
            Event::Text(e) => {
                if let Some(open) = stack.last_mut() {
                    let text = e
                        .unescape()
                        .map(Cow::into_owned)
                        .unwrap_or_else(|_| String::from_utf8_lossy(&e).into_owned());
                    open.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(RegistryError::Xml(format!("unclosed element <{}>", open.name)));
    }

    Ok(LabelDocument::Map(root))
}

fn attach(
    stack: &mut [OpenElement],
    root: &mut Vec<(String, LabelDocument)>,
    name: String,
    value: LabelDocument,
) {
    match stack.last_mut() {
        Some(parent) => push_child(&mut parent.entries, name, value),
        None => push_child(root, name, value),
    }
}
