use crate::dictionary::TagDictionary;
use crate::element::{RawElement, RawValue};
use crate::format::{format_value, NOT_AVAILABLE};
use crate::tag::{self, TagKey};
use log::debug;
use thiserror::Error;

/// Payloads longer than this are presumed binary even for textual VRs
const BINARY_LENGTH_THRESHOLD: usize = 1000;

/// Tags whose payload is always binary: pixel data, overlay data and
/// two vendor-private payload tags seen in the wild
const KNOWN_BINARY_TAGS: [TagKey; 4] = [
    tag::PIXEL_DATA,
    TagKey::new(0x5000, 0x3000),
    TagKey::new(0x0029, 0x1000),
    TagKey::new(0x0028, 0x6100),
];

/// Value representations that always carry binary payloads
const BINARY_VRS: &[&str] = &["OB", "OW", "OF", "OD", "UN"];

/// Why a single element's value could not be decoded to text
///
/// Collapsed locally to `"N/A"`; a decode issue never aborts the pass
/// or crosses the extraction boundary.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeIssue {
    /// Payload bytes are not valid text
    #[error("value bytes are not valid text")]
    NotText,
}

/// One normalized, display-ready metadata record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct TagRecord {
    /// Normalized tag
    pub key: TagKey,
    /// Value representation, `"UN"` when unresolvable
    pub vr: String,
    /// Attribute name, `"Unknown Tag"` when not in the dictionary
    pub name: String,
    /// Human-readable value
    pub display_value: String,
    /// Whether the payload was classified as binary
    pub is_binary: bool,
    /// Payload length in bytes
    pub byte_length: usize,
}

impl TagRecord {
    /// Presentation name of the record: `(GGGG,EEEE) Name`
    pub fn tag_display(&self) -> String {
        format!("{} {}", self.key, self.name)
    }
}

/// Turns a raw element map into an ordered list of [`TagRecord`]s
///
/// Extraction is a pure transform over the map handed over by the parser
/// collaborator: each pass builds a fresh record list, and a malformed
/// element only ever degrades itself. Input iteration order is preserved;
/// sorting is left to the presentation layer via [`TagKey`]'s ordering.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataExtractor {
    dictionary: TagDictionary,
}

impl MetadataExtractor {
    /// Creates an extractor backed by the standard dictionary
    pub fn new() -> Self {
        Self {
            dictionary: TagDictionary::new(),
        }
    }

    /// Extracts records from the raw element map, in iteration order
    pub fn extract<'a, I>(&self, elements: I) -> Vec<TagRecord>
    where
        I: IntoIterator<Item = (&'a str, &'a RawElement)>,
    {
        elements
            .into_iter()
            .filter_map(|(raw_key, element)| self.extract_one(raw_key, element))
            .collect()
    }

    fn extract_one(&self, raw_key: &str, element: &RawElement) -> Option<TagRecord> {
        let key = TagKey::from_composed_key(raw_key);
        let element_vr = element
            .vr
            .as_deref()
            .map(|vr| vr.trim().to_ascii_uppercase())
            .filter(|vr| !vr.is_empty());

        let is_binary = is_binary_element(key, element_vr.as_deref(), element.length);
        let display_value = if is_binary {
            format!("[Binary Data - {} bytes]", element.length)
        } else {
            match element.value.as_ref().map(decode_text).transpose() {
                Ok(text) => format_value(text.as_deref(), element_vr.as_deref()),
                Err(issue) => {
                    debug!("cannot decode value of {}: {}", key, issue);
                    NOT_AVAILABLE.to_string()
                }
            }
        };

        let info = self.dictionary.lookup(key);
        // A record carrying only a null value and an unknown tag adds no
        // information: drop it. Dictionary-known tags keep their "N/A"
        // rows so consumers can render unknown/empty values.
        if (display_value.is_empty() || display_value == NOT_AVAILABLE)
            && element_vr.is_none()
            && info.is_none()
        {
            debug!("dropping empty unknown element {}", key);
            return None;
        }

        let vr = element_vr
            .or_else(|| info.map(|i| i.vr.to_string()))
            .unwrap_or_else(|| "UN".to_string());
        let name = info
            .map(|i| i.name.to_string())
            .unwrap_or_else(|| "Unknown Tag".to_string());

        Some(TagRecord {
            key,
            vr,
            name,
            display_value,
            is_binary,
            byte_length: element.length,
        })
    }
}

/// Coerces a raw value to its textual form
fn decode_text(value: &RawValue) -> Result<String, DecodeIssue> {
    match value {
        RawValue::Text(s) => Ok(s.clone()),
        RawValue::Number(n) => Ok(n.to_string()),
        RawValue::NumberList(ns) => Ok(ns
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(",")),
        RawValue::Bytes(bytes) => std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| DecodeIssue::NotText),
    }
}

/// Classifies an element as binary, short-circuiting on the first hit:
/// known binary tag, then binary VR, then oversized payload
fn is_binary_element(key: TagKey, vr: Option<&str>, length: usize) -> bool {
    if KNOWN_BINARY_TAGS.contains(&key) {
        return true;
    }
    if let Some(vr) = vr {
        if BINARY_VRS.contains(&vr) {
            return true;
        }
    }
    length > BINARY_LENGTH_THRESHOLD
}
