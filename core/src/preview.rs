use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const IMAGE_MEDIA_PREFIX: &str = "image/";

pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_MEDIA_PREFIX)
}

/// Self-contained `data:` URL carrying the full file content.
pub fn data_url(media_type: &str, bytes: &[u8]) -> String {
    let mime = if media_type.trim().is_empty() {
        "application/octet-stream"
    } else {
        media_type
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_types_are_accepted() {
        assert!(is_image_media_type("image/jpeg"));
        assert!(is_image_media_type("image/png"));
        assert!(is_image_media_type("image/svg+xml"));
    }

    #[test]
    fn other_types_are_rejected() {
        assert!(!is_image_media_type("text/plain"));
        assert!(!is_image_media_type(""));
        assert!(!is_image_media_type("Image/jpeg"));
        assert!(!is_image_media_type("application/image/png"));
    }

    #[test]
    fn data_url_encodes_whole_payload() {
        assert_eq!(data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(data_url("image/gif", &[]), "data:image/gif;base64,");
    }

    #[test]
    fn data_url_defaults_missing_type() {
        assert_eq!(
            data_url("", &[0xff, 0xd8]),
            "data:application/octet-stream;base64,/9g="
        );
    }
}
