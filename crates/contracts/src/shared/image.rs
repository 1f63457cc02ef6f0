//! Acceptance rules for uploaded images
//!
//! The API stores whatever it is given; these checks run client side before a
//! file is attached to a form.

/// Content types the catalog accepts for image parts.
pub const ACCEPTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Upload cap: 10 MiB, inclusive.
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Check a candidate file before it replaces the current selection.
pub fn validate_image(content_type: &str, size_bytes: u64) -> Result<(), String> {
    if !ACCEPTED_IMAGE_TYPES.contains(&content_type) {
        return Err("Only jpeg, png and webp images are allowed".to_string());
    }
    if size_bytes > MAX_IMAGE_BYTES {
        return Err("Image must be 10 MB or smaller".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_allowed_types() {
        for content_type in ACCEPTED_IMAGE_TYPES {
            assert!(validate_image(content_type, 1024).is_ok());
        }
    }

    #[test]
    fn rejects_other_types() {
        assert!(validate_image("image/gif", 1024).is_err());
        assert!(validate_image("application/pdf", 1024).is_err());
        assert!(validate_image("", 1024).is_err());
    }

    #[test]
    fn cap_is_inclusive() {
        assert!(validate_image("image/png", MAX_IMAGE_BYTES).is_ok());
        assert!(validate_image("image/png", MAX_IMAGE_BYTES + 1).is_err());
    }

    #[test]
    fn oversized_jpeg_is_rejected() {
        let twelve_mib = 12 * 1024 * 1024;
        assert!(validate_image("image/jpeg", twelve_mib).is_err());
    }
}
