//! Storage object naming convention.
//!
//! The backend and the web pages agree on a per-user hierarchical namespace
//! in object storage. These helpers are the one place the layout is spelled
//! out.

/// Raw job description attached to a named CV:
/// `{uid}/cvs/{cv_name}/source_raw.txt`.
pub fn cv_source_raw(uid: &str, cv_name: &str) -> String {
    format!("{uid}/cvs/{cv_name}/source_raw.txt")
}

/// An uploaded source document: `{uid}/sources/{filename}`.
pub fn source_file(uid: &str, filename: &str) -> String {
    format!("{uid}/sources/{filename}")
}

/// Free-text personal information: `{uid}/sources/infos.txt`.
pub fn source_infos(uid: &str) -> String {
    source_file(uid, "infos.txt")
}
