//! Input boundary types for the raw element map
//!
//! The binary DICOM stream is decoded by an external parser collaborator,
//! which hands over a mapping from tag key string to raw element. The map's
//! iteration order is the presentation order; extraction never re-sorts.

/// A decoded element value as produced by the upstream parser
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum RawValue {
    /// Already-decoded text
    Text(String),
    /// Single numeric value
    Number(f64),
    /// Multi-valued numeric attribute
    NumberList(Vec<f64>),
    /// Undecoded payload bytes
    Bytes(Vec<u8>),
}

/// One entry of the raw element map
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct RawElement {
    /// Decoded value, if the parser produced one
    #[cfg_attr(feature = "json", serde(default))]
    pub value: Option<RawValue>,
    /// Value representation reported by the stream, if explicit
    #[cfg_attr(feature = "json", serde(default))]
    pub vr: Option<String>,
    /// Payload length in bytes
    #[cfg_attr(feature = "json", serde(default))]
    pub length: usize,
}

impl RawElement {
    /// Convenience constructor for a textual element
    pub fn text(value: impl Into<String>, vr: &str, length: usize) -> Self {
        Self {
            value: Some(RawValue::Text(value.into())),
            vr: Some(vr.to_string()),
            length,
        }
    }

    /// Convenience constructor for a binary element
    pub fn binary(bytes: Vec<u8>, vr: &str) -> Self {
        let length = bytes.len();
        Self {
            value: Some(RawValue::Bytes(bytes)),
            vr: Some(vr.to_string()),
            length,
        }
    }

    /// Convenience constructor for a numeric element
    pub fn number(value: f64, vr: &str, length: usize) -> Self {
        Self {
            value: Some(RawValue::Number(value)),
            vr: Some(vr.to_string()),
            length,
        }
    }
}
