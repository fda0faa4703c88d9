//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }
}

// ============================================================================
// [head] Section Defaults
// ============================================================================

pub mod head {
    pub fn og_image() -> String {
        "og-source.png".into()
    }
}
