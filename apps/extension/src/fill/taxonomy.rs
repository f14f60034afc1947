//! The field taxonomy: which form-field semantics the filler recognizes and
//! which lowercase keywords identify each of them.
//!
//! Declaration order is load-bearing. The classifier scans kinds in the order
//! they appear in [`TAXONOMY`], and the first kind with a matching keyword
//! wins. Overlaps between kinds (e.g. `github-location` hits both `github`
//! and `country` keywords) are resolved by that order, not by specificity.

use serde::{Deserialize, Serialize};

/// A recognized form-field semantic. Closed set; extending it means adding a
/// keyword row to [`TAXONOMY`] and a value to every `AutofillValues` source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Linkedin,
    Github,
    Country,
    Availability,
    Experience,
}

/// Ordered keyword table. All keywords are lowercase; matching is substring
/// containment against the lowercased element attributes.
pub const TAXONOMY: &[(FieldKind, &[&str])] = &[
    (FieldKind::Linkedin, &["linkedin", "linkedin-url", "linkedin-id"]),
    (FieldKind::Github, &["github", "github-id", "github-url"]),
    (FieldKind::Country, &["country", "pays", "location"]),
    (
        FieldKind::Availability,
        &["availability", "time-availability", "disponibilite"],
    ),
    (FieldKind::Experience, &["experience", "domain-experience"]),
];
