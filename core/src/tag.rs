use crate::error::{DicomLensError, Result};
use dicom_core::Tag;
use std::fmt;

// Transfer syntax and file meta tags
pub const TRANSFER_SYNTAX_UID: TagKey = TagKey::new(0x0002, 0x0010);
pub const FILE_META_INFO_GROUP_LENGTH: TagKey = TagKey::new(0x0002, 0x0000);

// Structural delimiter tags (no value representation)
pub const ITEM: TagKey = TagKey::new(0xFFFE, 0xE000);
pub const ITEM_DELIMITATION: TagKey = TagKey::new(0xFFFE, 0xE00D);
pub const SEQUENCE_DELIMITATION: TagKey = TagKey::new(0xFFFE, 0xE0DD);

// Payload and navigation tags
pub const PIXEL_DATA: TagKey = TagKey::new(0x7FE0, 0x0010);
pub const INSTANCE_NUMBER: TagKey = TagKey::new(0x0020, 0x0013);

/// Immutable DICOM tag: a (group, element) pair of 16-bit codes
///
/// The canonical textual identity is [`TagKey::compose_key`], eight
/// uppercase hexadecimal characters. The derived `Ord` compares group
/// first, then element, both numerically; any sorted presentation of
/// tags must use this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagKey {
    group: u16,
    element: u16,
}

impl TagKey {
    /// Creates a tag directly from numeric group and element codes
    pub const fn new(group: u16, element: u16) -> Self {
        Self { group, element }
    }

    /// Creates a tag from textual group and element codes
    ///
    /// # Errors
    ///
    /// Returns [`DicomLensError::InvalidTagCode`] unless each code is
    /// exactly four hexadecimal characters.
    pub fn create(group_code: &str, element_code: &str) -> Result<Self> {
        Ok(Self {
            group: parse_code(group_code)?,
            element: parse_code(element_code)?,
        })
    }

    /// Creates a tag from a composed key string, leniently
    ///
    /// Accepts the plain 8-hex-character form as well as the upstream
    /// parser's 9-character form with a non-hex prefix (e.g. `x00100010`).
    /// Any other shape is coerced: non-hex characters are stripped, the
    /// first eight hex digits are kept and left-padded with `'0'`. This
    /// never fails, so bulk extraction can normalize arbitrary keys.
    pub fn from_composed_key(raw: &str) -> Self {
        let digits = match strip_parser_prefix(raw) {
            Some(rest) => rest.to_string(),
            None => {
                let mut hex: String = raw.chars().filter(char::is_ascii_hexdigit).collect();
                hex.truncate(8);
                while hex.len() < 8 {
                    hex.insert(0, '0');
                }
                hex
            }
        };

        // digits is exactly eight ASCII hex characters here
        Self {
            group: hex4(&digits[0..4]),
            element: hex4(&digits[4..8]),
        }
    }

    /// Numeric group code
    pub fn group(&self) -> u16 {
        self.group
    }

    /// Numeric element code
    pub fn element(&self) -> u16 {
        self.element
    }

    /// Group code as four uppercase hex characters
    pub fn group_code(&self) -> String {
        format!("{:04X}", self.group)
    }

    /// Element code as four uppercase hex characters
    pub fn element_code(&self) -> String {
        format!("{:04X}", self.element)
    }

    /// Canonical identity: eight uppercase hex characters
    pub fn compose_key(&self) -> String {
        format!("{:04X}{:04X}", self.group, self.element)
    }

    /// Whether the group code is odd, i.e. vendor-reserved
    pub fn is_private(&self) -> bool {
        self.group % 2 == 1
    }

    /// False only for the three structural delimiter tags
    pub fn has_value_representation(&self) -> bool {
        !matches!(*self, ITEM | ITEM_DELIMITATION | SEQUENCE_DELIMITATION)
    }

    pub fn is_transfer_syntax_uid(&self) -> bool {
        *self == TRANSFER_SYNTAX_UID
    }

    pub fn is_file_meta_info_group_length(&self) -> bool {
        *self == FILE_META_INFO_GROUP_LENGTH
    }

    pub fn is_item(&self) -> bool {
        *self == ITEM
    }

    pub fn is_item_delimitation(&self) -> bool {
        *self == ITEM_DELIMITATION
    }

    pub fn is_sequence_delimitation(&self) -> bool {
        *self == SEQUENCE_DELIMITATION
    }

    pub fn is_pixel_data(&self) -> bool {
        *self == PIXEL_DATA
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.group, self.element)
    }
}

impl From<TagKey> for Tag {
    fn from(key: TagKey) -> Self {
        Tag(key.group, key.element)
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for TagKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.compose_key())
    }
}

fn parse_code(code: &str) -> Result<u16> {
    if code.len() != 4 || !code.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DicomLensError::InvalidTagCode(code.to_string()));
    }
    Ok(hex4(code))
}

/// The upstream parser emits keys like `x00100010`: one non-hex prefix
/// character followed by the eight hex digits.
fn strip_parser_prefix(raw: &str) -> Option<&str> {
    let mut chars = raw.chars();
    let first = chars.next()?;
    let rest = chars.as_str();
    if !first.is_ascii_hexdigit()
        && rest.len() == 8
        && rest.chars().all(|c| c.is_ascii_hexdigit())
    {
        Some(rest)
    } else {
        None
    }
}

/// Parses four hex characters; callers guarantee the shape
fn hex4(code: &str) -> u16 {
    u16::from_str_radix(code, 16).unwrap_or(0)
}
