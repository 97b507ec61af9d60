use crate::tag::TagKey;
use dicom_core::dictionary::{DataDictionary, TagRange};
use dicom_dictionary_std::StandardDataDictionary;

/// Display names for well-known tag groups
///
/// Kept sorted by group code.
const GROUP_NAMES: &[(u16, &str)] = &[
    (0x0002, "File Meta Information"),
    (0x0008, "Identifying Information"),
    (0x0010, "Patient Information"),
    (0x0018, "Acquisition Information"),
    (0x0020, "Relationship Information"),
    (0x0028, "Image Presentation"),
    (0x0032, "Study Information"),
    (0x0038, "Visit Information"),
    (0x0040, "Procedure Information"),
    (0x0054, "Nuclear Medicine"),
    (0x0088, "Storage"),
    (0x2050, "Presentation LUT"),
    (0x3002, "RT Image"),
    (0x5000, "Curve Data"),
    (0x7FE0, "Pixel Data"),
    (0xFFFE, "Delimiters"),
];

/// Dictionary information for a single tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    /// Typical value representation, two uppercase letters
    pub vr: &'static str,
    /// Human-readable attribute name
    pub name: &'static str,
}

/// Read-only lookup over the standard DICOM attribute registry
///
/// The backing registry is built lazily on first use and shared for the
/// lifetime of the process; there is no mutation path. Absence of an
/// entry is a normal outcome for private and retired tags, not an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagDictionary;

impl TagDictionary {
    /// Creates a handle to the shared dictionary
    pub fn new() -> Self {
        Self
    }

    /// Fetches the VR and name recorded for a tag, if any
    pub fn lookup(&self, key: TagKey) -> Option<TagInfo> {
        StandardDataDictionary
            .by_tag(key.into())
            .map(|entry| TagInfo {
                // registry entries carry a virtual VR; relax Px/Ox to a
                // concrete representative before rendering
                vr: entry.vr.relaxed().to_string(),
                name: entry.alias,
            })
    }

    /// Display name for a tag group, e.g. "File Meta Information"
    pub fn group_name(&self, group: u16) -> Option<&'static str> {
        GROUP_NAMES
            .binary_search_by_key(&group, |&(code, _)| code)
            .ok()
            .map(|idx| GROUP_NAMES[idx].1)
    }

    /// Finds the tag registered under the given attribute name
    pub fn find_by_name(&self, name: &str) -> Option<TagKey> {
        StandardDataDictionary
            .by_name(name)
            .and_then(|entry| match entry.tag {
                TagRange::Single(tag) => Some(TagKey::new(tag.group(), tag.element())),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag;

    #[test]
    fn test_lookup_known_tag() {
        let dict = TagDictionary::new();
        let info = dict.lookup(TagKey::new(0x0010, 0x0010)).unwrap();
        assert_eq!(info.name, "PatientName");
        assert_eq!(info.vr, "PN");
    }

    #[test]
    fn test_lookup_pixel_data() {
        let dict = TagDictionary::new();
        let info = dict.lookup(tag::PIXEL_DATA).unwrap();
        assert_eq!(info.name, "PixelData");
        assert!(info.vr == "OB" || info.vr == "OW");
    }

    #[test]
    fn test_virtual_vrs_resolve_to_concrete_codes() {
        // entries whose registry VR is virtual (Px/Ox classes) must still
        // render as a concrete two-letter code
        let dict = TagDictionary::new();
        for key in [
            tag::PIXEL_DATA,
            TagKey::new(0x6000, 0x3000), // OverlayData
            TagKey::new(0x0028, 0x0106), // SmallestImagePixelValue
        ] {
            let info = dict.lookup(key).unwrap();
            assert_eq!(info.vr.len(), 2, "{} rendered VR {:?}", key, info.vr);
            assert!(info.vr.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_lookup_private_tag_absent() {
        let dict = TagDictionary::new();
        assert!(dict.lookup(TagKey::new(0x0029, 0x1001)).is_none());
    }

    #[test]
    fn test_group_names() {
        let dict = TagDictionary::new();
        assert_eq!(dict.group_name(0x0002), Some("File Meta Information"));
        assert_eq!(dict.group_name(0x0010), Some("Patient Information"));
        assert_eq!(dict.group_name(0x7FE0), Some("Pixel Data"));
        assert_eq!(dict.group_name(0x0009), None);
    }

    #[test]
    fn test_find_by_name() {
        let dict = TagDictionary::new();
        assert_eq!(
            dict.find_by_name("PatientName"),
            Some(TagKey::new(0x0010, 0x0010))
        );
        assert_eq!(dict.find_by_name("NoSuchAttribute"), None);
    }
}
