//! Preview image URL normalization.
//!
//! The media provider serves resized variants when a crop directive such as
//! `crop/600/400/` is inserted right after the `media/` path segment of an
//! original image URL. [`crop_image_url`] performs that insertion so the
//! display layer always receives a ready-to-use URL, falling back to a
//! bundled placeholder when there is nothing to crop.

/// Bundled asset shown when a genre or game has no usable image.
pub const PLACEHOLDER_IMAGE: &str = "assets/image-placeholder/placeholder.webp";

/// Path segment the crop directive is anchored to.
const MEDIA_MARKER: &str = "media/";

/// Dimensions requested from the media provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropSize {
    pub width: u32,
    pub height: u32,
}

impl CropSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The URL path segment requesting this size, e.g. `crop/600/400/`.
    #[must_use]
    pub fn directive(&self) -> String {
        format!("crop/{}/{}/", self.width, self.height)
    }
}

impl Default for CropSize {
    fn default() -> Self {
        Self::new(600, 400)
    }
}

/// Normalize a raw image URL into a 600x400 cropped variant.
///
/// Missing or empty URLs, and URLs without a `media/` segment, yield
/// [`PLACEHOLDER_IMAGE`]. The function is meant to be applied once to raw
/// source data: applying it to its own output inserts a second directive.
#[must_use]
pub fn crop_image_url(url: Option<&str>) -> String {
    crop_image_url_with(url, CropSize::default())
}

/// Same as [`crop_image_url`] with an explicit crop size.
#[must_use]
pub fn crop_image_url_with(url: Option<&str>, size: CropSize) -> String {
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return PLACEHOLDER_IMAGE.to_string();
    };
    let Some(start) = url.find(MEDIA_MARKER) else {
        return PLACEHOLDER_IMAGE.to_string();
    };

    let (prefix, suffix) = url.split_at(start + MEDIA_MARKER.len());
    let directive = size.directive();

    let mut cropped = String::with_capacity(url.len() + directive.len());
    cropped.push_str(prefix);
    cropped.push_str(&directive);
    cropped.push_str(suffix);
    cropped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_inserts_directive_after_media_segment() {
        assert_eq!(
            crop_image_url(Some("https://example.com/media/games/1.jpg")),
            "https://example.com/media/crop/600/400/games/1.jpg"
        );
    }

    #[test]
    fn test_crop_splits_at_first_marker() {
        assert_eq!(
            crop_image_url(Some("https://cdn.example.com/media/screenshots/media/a.jpg")),
            "https://cdn.example.com/media/crop/600/400/screenshots/media/a.jpg"
        );
    }

    #[test]
    fn test_crop_missing_url_yields_placeholder() {
        assert_eq!(crop_image_url(None), PLACEHOLDER_IMAGE);
        assert_eq!(crop_image_url(Some("")), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_crop_without_marker_yields_placeholder() {
        assert_eq!(
            crop_image_url(Some("https://example.com/images/1.jpg")),
            PLACEHOLDER_IMAGE
        );
    }

    #[test]
    fn test_crop_is_not_idempotent() {
        let once = crop_image_url(Some("https://example.com/media/games/1.jpg"));
        let twice = crop_image_url(Some(&once));
        assert_ne!(once, twice);
        assert_eq!(
            twice,
            "https://example.com/media/crop/600/400/crop/600/400/games/1.jpg"
        );
    }

    #[test]
    fn test_crop_with_custom_size() {
        assert_eq!(
            crop_image_url_with(Some("https://example.com/media/g.png"), CropSize::new(80, 80)),
            "https://example.com/media/crop/80/80/g.png"
        );
    }

    #[test]
    fn test_crop_marker_at_end() {
        assert_eq!(
            crop_image_url(Some("https://example.com/media/")),
            "https://example.com/media/crop/600/400/"
        );
    }
}
