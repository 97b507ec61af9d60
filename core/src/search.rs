use crate::extract::TagRecord;

/// Case-insensitive substring filter over extracted records
///
/// An empty query (after trimming) selects every record. Otherwise a
/// record matches when its presentation name `(GGGG,EEEE) Name` or its
/// display value contains the query, case-insensitively. Pure substring
/// containment; relative order is preserved.
pub fn filter_records<'a>(records: &'a [TagRecord], query: &str) -> Vec<&'a TagRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| {
            record.tag_display().to_lowercase().contains(&needle)
                || record.display_value.to_lowercase().contains(&needle)
        })
        .collect()
}
