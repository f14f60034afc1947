//! AutofillValue mapping: the replacement string written for each field kind.
//!
//! Two legitimate data sources exist side by side: the static fixture set the
//! content script ships for development, and a profile-backed set built from
//! the user's generated profile document. Both resolve missing entries to the
//! empty string.

use std::collections::HashMap;

use serde_json::Value;

use crate::fill::taxonomy::FieldKind;

/// Fixture values written during development, one per kind.
pub const FIXTURE_LINKEDIN: &str = "https://www.linkedin.com/in/alexis-de-monts-61328a175";
pub const FIXTURE_GITHUB: &str = "alexdmds";
pub const FIXTURE_COUNTRY: &str = "France";
pub const FIXTURE_AVAILABILITY: &str = "20 hours per week";
pub const FIXTURE_EXPERIENCE: &str = "5 years of experience in data science";

/// Resolves a [`FieldKind`] to the string the mutator writes.
#[derive(Debug, Clone, Default)]
pub struct AutofillValues {
    entries: HashMap<FieldKind, String>,
}

impl AutofillValues {
    /// The static development fixture set.
    pub fn fixture() -> Self {
        let entries = HashMap::from([
            (FieldKind::Linkedin, FIXTURE_LINKEDIN.to_string()),
            (FieldKind::Github, FIXTURE_GITHUB.to_string()),
            (FieldKind::Country, FIXTURE_COUNTRY.to_string()),
            (FieldKind::Availability, FIXTURE_AVAILABILITY.to_string()),
            (FieldKind::Experience, FIXTURE_EXPERIENCE.to_string()),
        ]);
        AutofillValues { entries }
    }

    /// Builds the mapping from a generated profile document. String fields
    /// named after the kinds are picked up; anything else is skipped, leaving
    /// the kind to resolve to the empty string.
    pub fn from_profile(profile: &Value) -> Self {
        let mut entries = HashMap::new();
        let pairs = [
            (FieldKind::Linkedin, "linkedin"),
            (FieldKind::Github, "github"),
            (FieldKind::Country, "country"),
            (FieldKind::Availability, "availability"),
            (FieldKind::Experience, "experience"),
        ];
        for (kind, key) in pairs {
            if let Some(text) = profile.get(key).and_then(Value::as_str) {
                entries.insert(kind, text.to_string());
            }
        }
        AutofillValues { entries }
    }

    /// Empty string when the kind has no configured value.
    pub fn resolve(&self, kind: FieldKind) -> &str {
        self.entries.get(&kind).map(String::as_str).unwrap_or("")
    }
}
