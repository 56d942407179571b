//! Filtering image records down to the approved file names.
//!
//! Records come from the review grid as JSON objects. Their `isSelected`
//! flag is stringly typed: only the exact string `"true"` marks an image as
//! approved. A native boolean `true`, `"True"`, `1` and so on are all treated
//! as not selected. Downstream consumers rely on this, so it is kept as is.

use serde::de::IgnoredAny;
use serde::Deserialize;

/// The literal that marks a record as approved.
pub const APPROVED: &str = "true";

/// Raw value of a record's `isSelected` field.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum SelectionFlag {
    /// A string value. Only `"true"` is approval.
    Text(String),
    /// A native boolean. Never approval.
    Bool(bool),
    /// Field absent or `null`.
    #[default]
    Unset,
    /// Numbers, arrays, objects.
    Other(IgnoredAny),
}

impl SelectionFlag {
    /// Whether this flag marks the record as approved.
    pub fn is_approved(&self) -> bool {
        matches!(self, SelectionFlag::Text(text) if text == APPROVED)
    }
}

impl From<&str> for SelectionFlag {
    fn from(value: &str) -> Self {
        SelectionFlag::Text(value.to_string())
    }
}

impl From<bool> for SelectionFlag {
    fn from(value: bool) -> Self {
        SelectionFlag::Bool(value)
    }
}

/// An image entry from the review grid.
///
/// Only the fields needed for approval are read; anything else on the
/// object is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRecord {
    pub file_name: String,
    #[serde(rename = "isSelected", default)]
    pub is_selected: SelectionFlag,
}

impl ImageRecord {
    pub fn new(file_name: impl Into<String>, is_selected: impl Into<SelectionFlag>) -> Self {
        Self {
            file_name: file_name.into(),
            is_selected: is_selected.into(),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.is_selected.is_approved()
    }
}

/// File names of approved records, borrowed, in input order.
pub fn approved_file_names<'a, I>(images: I) -> impl Iterator<Item = &'a str>
where
    I: IntoIterator<Item = &'a ImageRecord>,
{
    images
        .into_iter()
        .filter(|image| image.is_approved())
        .map(|image| image.file_name.as_str())
}

/// File names of approved records, in input order.
///
/// Duplicates are kept.
pub fn get_approved_images(images: &[ImageRecord]) -> Vec<String> {
    approved_file_names(images).map(str::to_string).collect()
}
