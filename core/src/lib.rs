//! Tag normalization and metadata extraction for decoded DICOM element maps
//!
//! The binary stream is decoded by an external parser collaborator; this
//! crate turns its raw tag→element map into a canonical, searchable,
//! display-ready record set:
//!
//! - [`TagKey`]: normalized (group, element) identity with numeric ordering
//! - [`TagDictionary`]: read-only VR/name lookup over the standard registry
//! - [`format_value`]: VR-aware display formatting with text sanitization
//! - [`MetadataExtractor`]: binary/textual classification and record emission
//! - [`filter_records`]: case-insensitive substring search
//! - [`SeriesIndexSelector`]: instance-number navigation for multi-frame series
//! - [`ViewerContext`]: caller-owned init lifecycle for a rendering backend

pub mod cli;
pub mod dictionary;
pub mod element;
pub mod error;
pub mod extract;
pub mod format;
pub mod search;
pub mod series;
pub mod tag;
pub mod viewer;

pub use dictionary::{TagDictionary, TagInfo};
pub use element::{RawElement, RawValue};
pub use error::{DicomLensError, Result};
pub use extract::{DecodeIssue, MetadataExtractor, TagRecord};
pub use format::{format_value, NOT_AVAILABLE};
pub use search::filter_records;
pub use series::SeriesIndexSelector;
pub use tag::TagKey;
pub use viewer::{InitOutcome, RenderingBackend, ViewerContext};
