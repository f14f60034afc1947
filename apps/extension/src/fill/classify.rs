//! Field Classifier — maps the attributes of a focused input to an optional
//! [`FieldKind`]. Pure and DOM-free so it can be unit tested directly.

use crate::fill::taxonomy::{FieldKind, TAXONOMY};

/// Classifies an element by its `id`, `name`, and `placeholder` attributes.
///
/// Absent attributes are treated as empty strings; comparison is
/// case-insensitive. Kinds are scanned in taxonomy declaration order and the
/// first kind with any keyword contained in any attribute wins. Returns
/// `None` when nothing matches; never fails.
pub fn classify(
    id: Option<&str>,
    name: Option<&str>,
    placeholder: Option<&str>,
) -> Option<FieldKind> {
    let id = id.unwrap_or_default().to_lowercase();
    let name = name.unwrap_or_default().to_lowercase();
    let placeholder = placeholder.unwrap_or_default().to_lowercase();

    for (kind, keywords) in TAXONOMY {
        let matched = keywords.iter().any(|keyword| {
            id.contains(keyword) || name.contains(keyword) || placeholder.contains(keyword)
        });
        if matched {
            return Some(*kind);
        }
    }
    None
}
