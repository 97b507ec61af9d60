use crate::extract::TagRecord;
use std::fmt;

/// Text report formatter for extracted tag records
///
/// Renders the two-column Tag/Value table shown by the presentation
/// layer, one row per record, in the order given.
pub struct TextReport<'a> {
    records: &'a [&'a TagRecord],
}

impl<'a> TextReport<'a> {
    /// Creates a new text report over the given records
    pub fn new(records: &'a [&'a TagRecord]) -> Self {
        Self { records }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<44} Value", "Tag")?;
        writeln!(f, "{:<44} -----", "---")?;

        if self.records.is_empty() {
            writeln!(f, "No tags found.")?;
            return Ok(());
        }

        for record in self.records {
            writeln!(f, "{:<44} {}", record.tag_display(), record.display_value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::RawElement;
    use crate::extract::MetadataExtractor;

    #[test]
    fn test_text_report_format() {
        let elements = vec![
            ("00100010", RawElement::text("Smith^Jane", "PN", 10)),
            ("7FE00010", RawElement::binary(vec![0u8; 5000], "OW")),
        ];
        let records = MetadataExtractor::new().extract(elements.iter().map(|(k, e)| (*k, e)));
        let refs: Vec<&TagRecord> = records.iter().collect();

        let output = format!("{}", TextReport::new(&refs));
        assert!(output.contains("(0010,0010) PatientName"));
        assert!(output.contains("Smith^Jane"));
        assert!(output.contains("[Binary Data - 5000 bytes]"));
        assert!(!output.contains("No tags found."));
    }

    #[test]
    fn test_empty_report() {
        let output = format!("{}", TextReport::new(&[]));
        assert!(output.contains("No tags found."));
    }
}
