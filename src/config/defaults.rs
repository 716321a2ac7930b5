//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn root() -> String {
        "".into()
    }

    pub fn tag_dir() -> String {
        "tags".into()
    }
}

// ============================================================================
// [slug] Section Defaults
// ============================================================================

pub mod slug {
    use crate::config::SlugMode;

    pub fn tags() -> SlugMode {
        SlugMode::On
    }
}
